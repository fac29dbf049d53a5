//! Relevance filter connecting a project to log entries and todo items
//!
//! A keyword join done at query time: the keyword set comes from the
//! project's name, tech stack, and aliases; matching is case-insensitive
//! substring containment. The catalogs are tens of records, so there is no
//! precomputed index.

use crate::catalog::Catalog;
use crate::model::{LogEntry, Project, TodoItem};

/// Display cap for related log entries
pub const RELATED_LOG_CAP: usize = 5;

/// Lowercase keywords derived from one project
#[derive(Clone, Debug)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn for_project(project: &Project) -> Self {
        let mut keywords = Vec::with_capacity(1 + project.tech_stack.len() + project.aliases.len());
        keywords.push(project.name.to_lowercase());
        for tag in &project.tech_stack {
            keywords.push(tag.to_lowercase());
        }
        for alias in &project.aliases {
            keywords.push(alias.to_lowercase());
        }
        Self { keywords }
    }

    /// True if `text` contains any keyword, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Log entries relevant to `project`, in catalog order, capped at
/// [`RELATED_LOG_CAP`]. A log matches if any of its tags or its title
/// contains a keyword. Zero matches is a normal empty result.
pub fn related_logs<'a>(catalog: &'a Catalog, project: &Project) -> Vec<&'a LogEntry> {
    let keywords = KeywordSet::for_project(project);
    catalog
        .logs()
        .iter()
        .filter(|log| {
            log.tags.iter().any(|tag| keywords.matches(tag)) || keywords.matches(&log.title)
        })
        .take(RELATED_LOG_CAP)
        .collect()
}

/// Todo items relevant to `project`, in catalog order, uncapped. An item
/// matches if its category label or task text contains a keyword.
pub fn related_todos<'a>(catalog: &'a Catalog, project: &Project) -> Vec<&'a TodoItem> {
    let keywords = KeywordSet::for_project(project);
    catalog
        .todos()
        .iter()
        .filter(|item| {
            keywords.matches(&item.category.to_string()) || keywords.matches(&item.task)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConfig;
    use crate::model::{Isolation, LogEntry, Project, ProjectStatus};

    fn builtin() -> Catalog {
        Catalog::builtin()
    }

    fn project_named(catalog: &Catalog, name: &str) -> Project {
        catalog
            .project_by_name(name)
            .expect("builtin project exists")
            .clone()
    }

    fn bare_project(name: &str) -> Project {
        Project {
            name: name.into(),
            host: "R5 Server".into(),
            isolation: Isolation::Container,
            ram_allocated: "1GB".into(),
            ram_percentage: 0.0,
            status: ProjectStatus::Running,
            description: String::new(),
            color: "#ffffff".into(),
            tech_stack: Vec::new(),
            port: None,
            aliases: Vec::new(),
            overhead: false,
        }
    }

    #[test]
    fn minecraft_logs_match_by_tag() {
        let catalog = builtin();
        let project = project_named(&catalog, "Minecraft Server");
        let logs = related_logs(&catalog, &project);
        assert!(
            logs.iter().any(|l| l.tags.iter().any(|t| t == "Minecraft")),
            "expected a Minecraft-tagged log in {:?}",
            logs.iter().map(|l| &l.title).collect::<Vec<_>>()
        );
    }

    #[test]
    fn aliases_extend_the_keyword_set() {
        let catalog = builtin();
        let project = project_named(&catalog, "Minecraft Server");
        let todos = related_todos(&catalog, &project);
        // "Minecraft" category items match through the "minecraft" alias,
        // not through the full project name.
        assert!(todos.iter().any(|t| t.id == "t1"));
        assert!(todos.iter().any(|t| t.id == "t2"));
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let catalog = builtin();
        let project = project_named(&catalog, "Streaming / CasaOS");

        let first: Vec<String> = related_logs(&catalog, &project)
            .iter()
            .map(|l| l.title.clone())
            .collect();
        let second: Vec<String> = related_logs(&catalog, &project)
            .iter()
            .map(|l| l.title.clone())
            .collect();
        assert_eq!(first, second);

        // Catalog order is preserved: every result appears in feed order
        let feed: Vec<&str> = catalog.logs().iter().map(|l| l.title.as_str()).collect();
        let mut last_pos = 0;
        for title in &first {
            let pos = feed
                .iter()
                .position(|t| t == title)
                .expect("result comes from the feed");
            assert!(pos >= last_pos, "results out of feed order");
            last_pos = pos;
        }
    }

    #[test]
    fn disjoint_keywords_yield_empty_results() {
        let catalog = builtin();
        let project = bare_project("Zzqx Experimental");
        assert!(related_logs(&catalog, &project).is_empty());
        assert!(related_todos(&catalog, &project).is_empty());
    }

    #[test]
    fn related_logs_are_capped() {
        let mut config = CatalogConfig::builtin();
        config.logs = (0..12)
            .map(|i| LogEntry {
                date: "2024-06-01".into(),
                title: format!("minecraft tuning pass {}", i),
                content: String::new(),
                tags: vec!["Minecraft".into()],
            })
            .collect();
        let catalog = config.build().expect("validates");
        let project = project_named(&catalog, "Minecraft Server");
        let logs = related_logs(&catalog, &project);
        assert_eq!(logs.len(), RELATED_LOG_CAP);
        // First matches win
        assert_eq!(logs[0].title, "minecraft tuning pass 0");
    }

    #[test]
    fn todo_results_are_uncapped() {
        let mut config = CatalogConfig::builtin();
        let template = config.todos[0].clone();
        config.todos = (0..9)
            .map(|i| {
                let mut item = template.clone();
                item.id = format!("t{}", i);
                item.task = format!("minecraft chore {}", i);
                item
            })
            .collect();
        let catalog = config.build().expect("validates");
        let project = project_named(&catalog, "Minecraft Server");
        assert_eq!(related_todos(&catalog, &project).len(), 9);
    }
}
