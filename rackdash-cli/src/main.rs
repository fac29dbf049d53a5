mod render;
mod repl;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rackdash_core::allocation;
use rackdash_core::catalog::{Catalog, CatalogConfig, CatalogError};
use rackdash_core::view;

#[derive(Parser)]
#[command(name = "rackdash")]
#[command(about = "Status dashboard for the home rack", long_about = None)]
struct Cli {
    /// Load the catalog from a YAML file instead of the builtin records
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Machine cards plus the service status table (default)
    Overview,
    /// Hardware, ports and the software stack of one machine
    Machine { id: String },
    /// One project with its related log entries and tasks
    Project { name: String },
    /// RAM allocation chart for one machine
    Ram { machine: String },
    /// The full dev-log feed
    Logs,
    /// The full task list
    Todos,
    /// Workbench circuit nodes, or one node's detail
    Circuit { node: Option<String> },
    /// Talk to the assistant stub
    Chat,
    /// Write the builtin catalog to rackdash.yaml for editing
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Overview) {
        Commands::Overview => {
            let overview = view::overview(&catalog);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                render::overview(&overview);
            }
        }
        Commands::Machine { id } => {
            let detail = view::machine_detail(&catalog, &id)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                render::machine(&detail);
            }
        }
        Commands::Project { name } => {
            let detail = view::project_detail(&catalog, &name)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                render::project(&detail);
            }
        }
        Commands::Ram { machine } => {
            let series = allocation::ram_series(&catalog, &machine)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                let detail = view::machine_detail(&catalog, &machine)?;
                render::ram(detail.machine, &series);
            }
        }
        Commands::Logs => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog.logs())?);
            } else {
                render::logs(catalog.logs());
            }
        }
        Commands::Todos => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog.todos())?);
            } else {
                render::todos(catalog.todos());
            }
        }
        Commands::Circuit { node } => match node {
            Some(id) => {
                let node = view::node_detail(&catalog, &id)?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(node)?);
                } else {
                    render::node(node);
                }
            }
            None => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(catalog.nodes())?);
                } else {
                    render::nodes(catalog.nodes());
                }
            }
        },
        Commands::Chat => repl::run().await?,
        Commands::Init { force } => init_config(&catalog, force)?,
    }

    Ok(())
}

/// Resolve the catalog: explicit --config first, then rackdash.yaml in the
/// working directory or its parents, then the builtin records.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = path {
        let config = CatalogConfig::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?;
        return config
            .build()
            .with_context(|| format!("invalid catalog in {}", path.display()));
    }

    match CatalogConfig::discover(Path::new(".")) {
        Ok((path, config)) => {
            tracing::debug!(path = %path.display(), "using discovered catalog file");
            config
                .build()
                .with_context(|| format!("invalid catalog in {}", path.display()))
        }
        Err(CatalogError::NotFound { .. }) => Ok(Catalog::builtin()),
        Err(e) => Err(e).context("failed to read discovered catalog file"),
    }
}

fn init_config(catalog: &Catalog, force: bool) -> Result<()> {
    let path = Path::new("rackdash.yaml");
    if path.exists() && !force {
        bail!("rackdash.yaml already exists, pass --force to overwrite");
    }
    std::fs::write(path, catalog.to_yaml_string()?)
        .context("failed to write rackdash.yaml")?;
    println!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
