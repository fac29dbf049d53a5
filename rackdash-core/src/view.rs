//! View composition over the catalog
//!
//! Stateless functions mapping a selection (machine id, project name, node
//! id) to the records a detail screen needs. Unknown identifiers surface as
//! typed errors; the presentation layer decides how to render them.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{ComponentNode, LogEntry, Machine, Project, TodoItem};
use crate::relevance;

/// Selection errors
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    MachineNotFound { id: String },
    ProjectNotFound { name: String },
    NodeNotFound { id: String },
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MachineNotFound { id } => write!(f, "machine not found: {}", id),
            Self::ProjectNotFound { name } => write!(f, "project not found: {}", name),
            Self::NodeNotFound { id } => write!(f, "circuit node not found: {}", id),
        }
    }
}

impl std::error::Error for ViewError {}

/// One machine plus the projects pinned to it, overhead entries excluded
#[derive(Clone, Debug, Serialize)]
pub struct MachineDetail<'a> {
    pub machine: &'a Machine,
    pub projects: Vec<&'a Project>,
}

/// One project plus its relevant slice of the log feed and task list
#[derive(Clone, Debug, Serialize)]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
    pub logs: Vec<&'a LogEntry>,
    pub todos: Vec<&'a TodoItem>,
}

/// The dashboard landing view: all machines, all user-facing services
#[derive(Clone, Debug, Serialize)]
pub struct Overview<'a> {
    pub machines: &'a [Machine],
    pub services: Vec<&'a Project>,
}

/// Projects pinned to `machine`, in catalog order, without the reserved
/// host-OS/buffer entry
fn displayed_projects<'a>(catalog: &'a Catalog, machine: &Machine) -> Vec<&'a Project> {
    catalog
        .projects()
        .iter()
        .filter(|p| p.host == machine.host_label && !p.overhead)
        .collect()
}

pub fn machine_detail<'a>(catalog: &'a Catalog, id: &str) -> Result<MachineDetail<'a>, ViewError> {
    let machine = catalog
        .machine(id)
        .ok_or_else(|| ViewError::MachineNotFound { id: id.to_string() })?;
    Ok(MachineDetail {
        projects: displayed_projects(catalog, machine),
        machine,
    })
}

pub fn project_detail<'a>(
    catalog: &'a Catalog,
    name: &str,
) -> Result<ProjectDetail<'a>, ViewError> {
    let project = catalog
        .project_by_name(name)
        .ok_or_else(|| ViewError::ProjectNotFound {
            name: name.to_string(),
        })?;
    Ok(ProjectDetail {
        logs: relevance::related_logs(catalog, project),
        todos: relevance::related_todos(catalog, project),
        project,
    })
}

pub fn overview(catalog: &Catalog) -> Overview<'_> {
    Overview {
        machines: catalog.machines(),
        services: catalog.projects().iter().filter(|p| !p.overhead).collect(),
    }
}

pub fn node_detail<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a ComponentNode, ViewError> {
    catalog
        .node(id)
        .ok_or_else(|| ViewError::NodeNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_detail_selects_exactly_the_hosts_projects() {
        let catalog = Catalog::builtin();
        let detail = machine_detail(&catalog, "r5").expect("r5 exists");

        // Everything returned belongs to the host and is user-facing
        for project in &detail.projects {
            assert_eq!(project.host, detail.machine.host_label);
            assert!(!project.overhead);
        }

        // Nothing that belongs was left out
        let expected = catalog
            .projects()
            .iter()
            .filter(|p| p.host == "R5 Server" && !p.overhead)
            .count();
        assert_eq!(detail.projects.len(), expected);

        // The buffer sentinel is present in the catalog but not displayed
        assert!(catalog.projects().iter().any(|p| p.overhead));
        assert!(!detail.projects.iter().any(|p| p.overhead));
    }

    #[test]
    fn unknown_machine_is_an_explicit_not_found() {
        let catalog = Catalog::builtin();
        let err = machine_detail(&catalog, "nonexistent").expect_err("must not resolve");
        assert_eq!(
            err,
            ViewError::MachineNotFound {
                id: "nonexistent".into()
            }
        );
    }

    #[test]
    fn project_detail_composes_relevant_records() {
        let catalog = Catalog::builtin();
        let detail = project_detail(&catalog, "minecraft server").expect("name is case-insensitive");
        assert_eq!(detail.project.name, "Minecraft Server");
        assert!(!detail.logs.is_empty());
        assert!(!detail.todos.is_empty());
        assert!(detail.logs.len() <= relevance::RELATED_LOG_CAP);
    }

    #[test]
    fn unknown_project_is_an_explicit_not_found() {
        let catalog = Catalog::builtin();
        let err = project_detail(&catalog, "no such service").expect_err("must not resolve");
        assert!(matches!(err, ViewError::ProjectNotFound { .. }));
    }

    #[test]
    fn overview_hides_overhead_entries() {
        let catalog = Catalog::builtin();
        let view = overview(&catalog);
        assert_eq!(view.machines.len(), 2);
        assert!(!view.services.iter().any(|p| p.overhead));
    }

    #[test]
    fn node_detail_resolves_by_id() {
        let catalog = Catalog::builtin();
        let node = node_detail(&catalog, "bjt-fuzz").expect("node exists");
        assert_eq!(node.label, "BJT Fuzz Core");
        assert!(matches!(
            node_detail(&catalog, "missing"),
            Err(ViewError::NodeNotFound { .. })
        ));
    }
}
