//! Plain-text rendering of the core views
//!
//! Everything prints to stdout; diagnostics go to tracing on stderr. The
//! layout favors fixed-width columns so output stays readable when piped.

use rackdash_core::allocation::RamSlice;
use rackdash_core::model::{ComponentNode, LogEntry, Machine, Project, TodoItem, TodoStatus};
use rackdash_core::view::{MachineDetail, Overview, ProjectDetail};

fn rule(width: usize) {
    println!("{}", "-".repeat(width));
}

fn machine_card(machine: &Machine) {
    println!("{}  [{}]", machine.name, machine.id);
    println!("  {}", machine.role);
    println!("  CPU      {}", machine.cpu);
    println!("  GPU      {}", machine.gpu);
    println!("  RAM      {}", machine.ram);
    for (idx, disk) in machine.storage.iter().enumerate() {
        if idx == 0 {
            println!("  Storage  {}", disk);
        } else {
            println!("           {}", disk);
        }
    }
    println!("  OS       {}", machine.os);
    if !machine.key_projects.is_empty() {
        println!("  Key      {}", machine.key_projects.join(", "));
    }
    println!("  {}", machine.description);
}

fn service_row(project: &Project) {
    let port = project.port.as_deref().unwrap_or("-");
    println!(
        "{:<20} {:<12} {:<10} {:<12} {:>8}  {}",
        project.name,
        project.host,
        project.isolation.to_string(),
        project.status.to_string(),
        project.ram_allocated,
        port
    );
}

pub fn overview(view: &Overview<'_>) {
    println!("Machines");
    rule(72);
    for machine in view.machines {
        machine_card(machine);
        println!();
    }

    println!("Services");
    rule(72);
    println!(
        "{:<20} {:<12} {:<10} {:<12} {:>8}  {}",
        "SERVICE", "HOST", "ISOLATION", "STATUS", "RAM", "PORT"
    );
    for project in &view.services {
        service_row(project);
    }
}

pub fn machine(detail: &MachineDetail<'_>) {
    let machine = detail.machine;
    machine_card(machine);
    println!();

    if !machine.ports.is_empty() {
        println!("Physical I/O");
        for port in &machine.ports {
            println!("  - {}", port);
        }
        println!();
    }

    println!("Software stack");
    rule(72);
    println!("Layer 1  Host OS     {}", machine.os);
    println!(
        "Layer 2  Isolation   {}  ({})",
        machine.isolation_tech, machine.resource_limit
    );
    println!("Layer 3  Projects");
    for project in &detail.projects {
        println!(
            "  - {:<20} [{}]  RAM {}",
            project.name, project.status, project.ram_allocated
        );
        if !project.tech_stack.is_empty() {
            println!("      {}", project.tech_stack.join(", "));
        }
    }
}

pub fn project(detail: &ProjectDetail<'_>) {
    let project = detail.project;
    println!(
        "{}  ({} / {} / {})",
        project.name, project.host, project.isolation, project.status
    );
    println!("  {}", project.description);
    if !project.tech_stack.is_empty() {
        println!("  Stack  {}", project.tech_stack.join(", "));
    }
    if let Some(port) = &project.port {
        println!("  Port   {}", port);
    }
    println!("  RAM    {} ({}%)", project.ram_allocated, project.ram_percentage);
    println!();

    println!("Recent updates");
    rule(72);
    if detail.logs.is_empty() {
        println!("  No specific logs found for this project.");
    } else {
        for log in &detail.logs {
            println!("  {}  {}", log.date, log.title);
            println!("      {}", log.content);
        }
    }
    println!();

    println!("Tasks");
    rule(72);
    if detail.todos.is_empty() {
        println!("  All clear, no active tasks for this project.");
    } else {
        for todo in &detail.todos {
            println!(
                "  {} {}  [{} / {}]",
                status_marker(todo.status),
                todo.task,
                todo.category,
                todo.priority
            );
        }
    }
}

fn status_marker(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Pending => "[ ]",
        TodoStatus::InProgress => "[>]",
        TodoStatus::Done => "[x]",
    }
}

pub fn ram(machine: &Machine, series: &[RamSlice]) {
    println!("RAM allocation  {}  ({})", machine.name, machine.resource_limit);
    rule(72);
    for slice in series {
        let width = (slice.percentage / 2.0).round() as usize;
        println!(
            "{:<20} {:>8}  {:>6.2}%  {}",
            slice.label,
            slice.allocated,
            slice.percentage,
            "#".repeat(width)
        );
    }
    let sum: f32 = series.iter().map(|s| s.percentage).sum();
    println!("{:<20} {:>8}  {:>6.2}%", "total", "", sum);
}

pub fn logs(entries: &[LogEntry]) {
    for log in entries {
        println!("{}  {}", log.date, log.title);
        println!("    {}", log.content);
        if !log.tags.is_empty() {
            let tags: Vec<String> = log.tags.iter().map(|t| format!("#{}", t)).collect();
            println!("    {}", tags.join(" "));
        }
        println!();
    }
}

pub fn todos(items: &[TodoItem]) {
    println!("{} tasks", items.len());
    rule(72);
    for todo in items {
        println!(
            "{} {:<70}  {:<10} {}",
            status_marker(todo.status),
            todo.task,
            todo.category.to_string(),
            todo.priority
        );
    }
}

pub fn nodes(nodes: &[ComponentNode]) {
    println!(
        "{:<14} {:<8} {:<22} {}",
        "ID", "TYPE", "LABEL", "DESCRIPTION"
    );
    for node in nodes {
        println!(
            "{:<14} {:<8} {:<22} {}",
            node.id,
            node.node_type.to_string(),
            node.label,
            node.description
        );
    }
}

pub fn node(node: &ComponentNode) {
    println!("{}  [{}]", node.label, node.node_type);
    println!("  {}", node.description);
    if let Some(details) = &node.circuit_details {
        println!("  {}", details);
    }
}
