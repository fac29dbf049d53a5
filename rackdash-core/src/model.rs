//! Record types for the dashboard catalog
//!
//! Everything here is declarative data: machines, the services pinned to
//! them, the dev-log feed, the task list, and the circuit nodes of the
//! workbench sub-view. Records are immutable once the catalog is built.

use serde::{Deserialize, Serialize};

/// Unique identifier for a machine
pub type MachineId = String;
/// Unique identifier for a todo item
pub type TodoId = String;
/// Unique identifier for a circuit component node
pub type NodeId = String;

/// How a project is separated from the host operating system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Isolation {
    /// Container runtime on the host kernel
    Container,
    /// Full virtual machine with its own kernel
    VirtualMachine,
    /// Native environment, no OS-level isolation
    Native,
}

impl std::fmt::Display for Isolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Container => write!(f, "Container"),
            Self::VirtualMachine => write!(f, "VM"),
            Self::Native => write!(f, "Native"),
        }
    }
}

/// Reported lifecycle state of a project
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Running,
    Idle,
    Stopped,
    Maintenance,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Idle => write!(f, "Idle"),
            Self::Stopped => write!(f, "Stopped"),
            Self::Maintenance => write!(f, "Maintenance"),
        }
    }
}

/// A physical machine in the rack
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Machine {
    /// Unique identifier (`r5`, `katana17`, ...)
    pub id: MachineId,
    /// Full display name
    pub name: String,
    /// Canonical host label projects reference in their `host` field
    pub host_label: String,
    /// One-line role description
    pub role: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    #[serde(default)]
    pub storage: Vec<String>,
    pub os: String,
    /// Isolation technology summary for the stack diagram
    pub isolation_tech: String,
    /// Resource ceiling note (RAM cap, TGP, ...)
    pub resource_limit: String,
    /// Headline project tags shown on the machine card
    #[serde(default)]
    pub key_projects: Vec<String>,
    pub description: String,
    /// Physical I/O ports, if worth listing
    #[serde(default)]
    pub ports: Vec<String>,
}

/// A service or environment pinned to one machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Must match the `host_label` of a machine in the same catalog
    pub host: String,
    pub isolation: Isolation,
    /// Allocated RAM as a display string ("4GB", "Dynamic", ...)
    pub ram_allocated: String,
    /// Share of the host's RAM budget, 0..=100. Zero means the entry is
    /// not charted; per-host shares are not required to sum to 100.
    #[serde(default)]
    pub ram_percentage: f32,
    pub status: ProjectStatus,
    pub description: String,
    /// Hex display color used by chart slices
    pub color: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Network port or access descriptor
    #[serde(default)]
    pub port: Option<String>,
    /// Extra relevance keywords beyond name and tech stack
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Marks the reserved host-OS/buffer entry: charted, but hidden from
    /// project lists
    #[serde(default)]
    pub overhead: bool,
}

/// One entry in the dev-log feed, most recent first
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Task category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoCategory {
    System,
    Minecraft,
    Jellyfin,
    Network,
    Frontend,
    Backend,
    AiModel,
}

impl std::fmt::Display for TodoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Minecraft => write!(f, "Minecraft"),
            Self::Jellyfin => write!(f, "Jellyfin"),
            Self::Network => write!(f, "Network"),
            Self::Frontend => write!(f, "Frontend"),
            Self::Backend => write!(f, "Backend"),
            Self::AiModel => write!(f, "AI Model"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Done,
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// One item on the task list
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub task: String,
    pub category: TodoCategory,
    pub priority: TodoPriority,
    pub status: TodoStatus,
}

/// Kind of a circuit component node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Signal,
    Ui,
    Power,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signal => write!(f, "Signal"),
            Self::Ui => write!(f, "UI"),
            Self::Power => write!(f, "Power"),
        }
    }
}

/// A component in the workbench circuit sub-view
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: NodeId,
    pub label: String,
    pub node_type: NodeType,
    pub description: String,
    /// Electrical detail shown when the node is selected
    #[serde(default)]
    pub circuit_details: Option<String>,
}
