//! Gallery queries: the technology filter bar and the filtered project list.

use std::collections::BTreeSet;

use folio_core::ProjectRecord;

/// Filter entry that selects every project.
pub const ALL_TECHNOLOGIES: &str = "Todos";

/// `"Todos"` followed by every technology used by a project, sorted and unique.
pub fn technology_filters(projects: &[ProjectRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.technologies.iter().map(String::as_str))
        .collect();

    std::iter::once(ALL_TECHNOLOGIES)
        .chain(unique)
        .map(str::to_string)
        .collect()
}

/// Projects using `technology` (exact match). `"Todos"` keeps everything.
pub fn filter_by_technology<'a>(
    projects: &'a [ProjectRecord],
    technology: &str,
) -> Vec<&'a ProjectRecord> {
    if technology == ALL_TECHNOLOGIES {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.technologies.iter().any(|t| t == technology))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, techs: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: id.into(),
            category: "Geral".into(),
            thumbnail: String::new(),
            images: vec![],
            description: String::new(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            link: None,
        }
    }

    #[test]
    fn test_technology_filters_sorted_unique() {
        let projects = vec![
            project("a", &["SQL", "Power BI"]),
            project("b", &["Python", "SQL"]),
        ];
        assert_eq!(
            technology_filters(&projects),
            vec!["Todos", "Power BI", "Python", "SQL"]
        );
        assert_eq!(technology_filters(&[]), vec!["Todos"]);
    }

    #[test]
    fn test_filter_by_technology() {
        let projects = vec![
            project("a", &["SQL", "Power BI"]),
            project("b", &["Python"]),
        ];
        let sql: Vec<_> = filter_by_technology(&projects, "SQL")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(sql, vec!["a"]);
        assert_eq!(filter_by_technology(&projects, "Todos").len(), 2);
        assert!(filter_by_technology(&projects, "sql").is_empty());
    }
}
