//! Catalog construction and validation
//!
//! The catalog is the immutable record set everything else reads from. It is
//! either compiled in ([`Catalog::builtin`]) or loaded from a YAML document
//! and validated ([`CatalogConfig`]). Nothing mutates it after construction;
//! selectors and filters borrow it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::model::{ComponentNode, LogEntry, Machine, Project, TodoItem};

/// Catalog loading and validation errors
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    DuplicateMachine { id: String },
    DuplicateTodo { id: String },
    DuplicateNode { id: String },
    UnknownHost { project: String, host: String },
    RamPercentageOutOfRange { project: String, value: f32 },
    NotFound { searched: Vec<PathBuf> },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::DuplicateMachine { id } => write!(f, "duplicate machine id '{}'", id),
            Self::DuplicateTodo { id } => write!(f, "duplicate todo id '{}'", id),
            Self::DuplicateNode { id } => write!(f, "duplicate node id '{}'", id),
            Self::UnknownHost { project, host } => {
                write!(f, "project '{}' references unknown host '{}'", project, host)
            }
            Self::RamPercentageOutOfRange { project, value } => {
                write!(
                    f,
                    "project '{}' has ram percentage {} outside 0..=100",
                    project, value
                )
            }
            Self::NotFound { searched } => {
                write!(f, "no catalog file found, searched: {:?}", searched)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(e: serde_yaml::Error) -> Self {
        CatalogError::Yaml(e)
    }
}

/// Declarative catalog document, the YAML-facing shape
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Config file version
    #[serde(default = "default_version")]
    pub version: String,

    pub machines: Vec<Machine>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub todos: Vec<TodoItem>,
    #[serde(default)]
    pub nodes: Vec<ComponentNode>,
}

fn default_version() -> String {
    "1".into()
}

impl CatalogConfig {
    /// The compiled-in record set
    pub fn builtin() -> Self {
        builtin::config()
    }

    /// Load a catalog document from a file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a catalog document from a YAML string (useful for testing)
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Search for a catalog file in standard locations
    pub fn discover(start_dir: &Path) -> Result<(PathBuf, Self), CatalogError> {
        let names = ["rackdash.yaml", "rackdash.yml", ".rackdash.yaml"];
        let mut searched = Vec::new();

        // Environment variable wins over directory search
        if let Ok(env_path) = std::env::var("RACKDASH_CONFIG") {
            let path = PathBuf::from(&env_path);
            if path.exists() {
                return Ok((path.clone(), Self::load(&path)?));
            }
            searched.push(path);
        }

        let mut dir = Some(start_dir);
        while let Some(current) = dir {
            for name in &names {
                let path = current.join(name);
                if path.exists() {
                    return Ok((path.clone(), Self::load(&path)?));
                }
                searched.push(path);
            }
            dir = current.parent();
        }

        Err(CatalogError::NotFound { searched })
    }

    /// Validate the document and freeze it into a [`Catalog`]
    pub fn build(self) -> Result<Catalog, CatalogError> {
        self.validate()?;
        tracing::debug!(
            machines = self.machines.len(),
            projects = self.projects.len(),
            logs = self.logs.len(),
            todos = self.todos.len(),
            nodes = self.nodes.len(),
            "catalog validated"
        );
        Ok(Catalog::from_config(self))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (idx, machine) in self.machines.iter().enumerate() {
            if self.machines[..idx].iter().any(|m| m.id == machine.id) {
                return Err(CatalogError::DuplicateMachine {
                    id: machine.id.clone(),
                });
            }
        }

        // Every project must resolve to a machine by host label
        for project in &self.projects {
            if !self.machines.iter().any(|m| m.host_label == project.host) {
                return Err(CatalogError::UnknownHost {
                    project: project.name.clone(),
                    host: project.host.clone(),
                });
            }
            if !project.ram_percentage.is_finite()
                || project.ram_percentage < 0.0
                || project.ram_percentage > 100.0
            {
                return Err(CatalogError::RamPercentageOutOfRange {
                    project: project.name.clone(),
                    value: project.ram_percentage,
                });
            }
        }

        for (idx, todo) in self.todos.iter().enumerate() {
            if self.todos[..idx].iter().any(|t| t.id == todo.id) {
                return Err(CatalogError::DuplicateTodo { id: todo.id.clone() });
            }
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if self.nodes[..idx].iter().any(|n| n.id == node.id) {
                return Err(CatalogError::DuplicateNode { id: node.id.clone() });
            }
        }

        Ok(())
    }
}

/// The validated, immutable record set
#[derive(Clone, Debug)]
pub struct Catalog {
    machines: Vec<Machine>,
    projects: Vec<Project>,
    logs: Vec<LogEntry>,
    todos: Vec<TodoItem>,
    nodes: Vec<ComponentNode>,
}

impl Catalog {
    /// The compiled-in catalog. The builtin records pass the same
    /// validation as loaded ones (covered by a test), so this cannot fail.
    pub fn builtin() -> Self {
        Self::from_config(CatalogConfig::builtin())
    }

    fn from_config(config: CatalogConfig) -> Self {
        Self {
            machines: config.machines,
            projects: config.projects,
            logs: config.logs,
            todos: config.todos,
            nodes: config.nodes,
        }
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn nodes(&self) -> &[ComponentNode] {
        &self.nodes
    }

    /// Look up a machine by id
    pub fn machine(&self, id: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == id)
    }

    /// Look up a project by name, case-insensitively
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Look up a circuit node by id
    pub fn node(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Serialize back to the YAML document form
    pub fn to_yaml_string(&self) -> Result<String, CatalogError> {
        let config = CatalogConfig {
            version: default_version(),
            machines: self.machines.clone(),
            projects: self.projects.clone(),
            logs: self.logs.clone(),
            todos: self.todos.clone(),
            nodes: self.nodes.clone(),
        };
        Ok(serde_yaml::to_string(&config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = CatalogConfig::builtin().build().expect("builtin validates");
        assert!(!catalog.machines().is_empty());
        assert!(!catalog.projects().is_empty());
    }

    #[test]
    fn every_project_host_resolves() {
        let catalog = Catalog::builtin();
        for project in catalog.projects() {
            assert!(
                catalog
                    .machines()
                    .iter()
                    .any(|m| m.host_label == project.host),
                "project '{}' has dangling host '{}'",
                project.name,
                project.host
            );
        }
    }

    #[test]
    fn dangling_host_is_rejected() {
        let yaml = r##"
machines:
  - id: box1
    name: Box One
    host_label: Box One
    role: test
    cpu: cpu
    gpu: gpu
    ram: 8GB
    os: Linux
    isolation_tech: none
    resource_limit: none
    description: test machine
projects:
  - name: Orphan
    host: Nowhere
    isolation: container
    ram_allocated: 1GB
    ram_percentage: 10
    status: running
    description: points at a missing machine
    color: "#ffffff"
"##;
        let err = CatalogConfig::from_yaml_str(yaml)
            .expect("parses")
            .build()
            .expect_err("must fail validation");
        assert!(matches!(err, CatalogError::UnknownHost { .. }));
    }

    #[test]
    fn duplicate_machine_id_is_rejected() {
        let mut config = CatalogConfig::builtin();
        let copy = config.machines[0].clone();
        config.machines.push(copy);
        let err = config.build().expect_err("must fail validation");
        assert!(matches!(err, CatalogError::DuplicateMachine { .. }));
    }

    #[test]
    fn ram_percentage_out_of_range_is_rejected() {
        let mut config = CatalogConfig::builtin();
        config.projects[0].ram_percentage = 120.0;
        let err = config.build().expect_err("must fail validation");
        assert!(matches!(err, CatalogError::RamPercentageOutOfRange { .. }));
    }

    #[test]
    fn yaml_round_trip_preserves_the_catalog() {
        let catalog = Catalog::builtin();
        let yaml = catalog.to_yaml_string().expect("serializes");
        let reloaded = CatalogConfig::from_yaml_str(&yaml)
            .expect("parses")
            .build()
            .expect("validates");
        assert_eq!(catalog.machines().len(), reloaded.machines().len());
        assert_eq!(catalog.projects().len(), reloaded.projects().len());
        assert_eq!(catalog.logs().len(), reloaded.logs().len());
        assert_eq!(catalog.todos().len(), reloaded.todos().len());
        assert_eq!(catalog.nodes().len(), reloaded.nodes().len());
    }
}
