//! Filtered views over catalog collections.
//!
//! Pure functions: callers fetch the collection from a repository and pass
//! the slice in. Results preserve the collection's order; nothing is ranked.

use std::collections::HashMap;

use super::{CatalogItem, Course, Package};

/// Which view of a catalog collection a listing request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogFilter {
    All,
    Search(String),
    Category(String),
}

impl CatalogFilter {
    /// Builds a filter from optional request parameters.
    ///
    /// Absent or empty parameters are ignored. Search wins over category
    /// when both are present.
    pub fn from_params(search: Option<&str>, category: Option<&str>) -> Self {
        match (non_empty(search), non_empty(category)) {
            (Some(text), _) => CatalogFilter::Search(text.to_string()),
            (None, Some(category)) => CatalogFilter::Category(category.to_string()),
            (None, None) => CatalogFilter::All,
        }
    }

    /// Applies the filter to a collection snapshot.
    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> Vec<T> {
        match self {
            CatalogFilter::All => items.to_vec(),
            CatalogFilter::Search(text) => search(items, text),
            CatalogFilter::Category(category) => by_category(items, category),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Items whose category equals `category`, ignoring case.
pub fn by_category<T: CatalogItem + Clone>(items: &[T], category: &str) -> Vec<T> {
    let wanted = category.to_lowercase();
    items
        .iter()
        .filter(|item| item.category().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Items whose title or description contains `text`, ignoring case.
///
/// An empty `text` matches nothing.
pub fn search<T: CatalogItem + Clone>(items: &[T], text: &str) -> Vec<T> {
    if text.is_empty() {
        return Vec::new();
    }
    let needle = text.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title().to_lowercase().contains(&needle)
                || item
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Resolves a package's course references in the package's order.
///
/// Ids with no matching course are skipped.
pub fn courses_in_package(package: &Package, courses: &[Course]) -> Vec<Course> {
    let by_id: HashMap<&str, &Course> = courses.iter().map(|c| (c.id.as_str(), c)).collect();
    package
        .course_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|c| (*c).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::NewCourse;
    use crate::domain::foundation::{Entity, EntityId, Timestamp};
    use proptest::prelude::*;

    fn course(id: &str, title: &str, description: Option<&str>, category: &str) -> Course {
        let mut draft = NewCourse::new(title).with_category(category);
        draft.description = description.map(str::to_string);
        Course::from_draft(EntityId::new(id).unwrap(), Timestamp::now(), draft)
    }

    fn sample() -> Vec<Course> {
        vec![
            course("1", "Intro to Web Development", Some("HTML, CSS, and JS."), "Development"),
            course("2", "Digital Marketing 101", Some("Online marketing basics."), "Marketing"),
            course("3", "React for Beginners", Some("Learn React.js."), "Development"),
            course("4", "Finance Fundamentals", None, "Finance"),
        ]
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn by_category_ignores_case() {
        let courses = sample();
        let lower = by_category(&courses, "development");
        let upper = by_category(&courses, "Development");

        assert_eq!(ids(&lower), vec!["1", "3"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn by_category_unknown_is_empty() {
        assert!(by_category(&sample(), "Cooking").is_empty());
    }

    #[test]
    fn by_category_is_exact_not_substring() {
        assert!(by_category(&sample(), "Develop").is_empty());
    }

    #[test]
    fn search_matches_title_or_description() {
        let courses = sample();
        assert_eq!(ids(&search(&courses, "react")), vec!["3"]);
        assert_eq!(ids(&search(&courses, "CSS")), vec!["1"]);
    }

    #[test]
    fn search_keeps_collection_order() {
        let courses = sample();
        assert_eq!(ids(&search(&courses, "e")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_skips_missing_descriptions() {
        let courses = sample();
        assert_eq!(ids(&search(&courses, "fundamentals")), vec!["4"]);
    }

    #[test]
    fn search_empty_text_matches_nothing() {
        assert!(search(&sample(), "").is_empty());
    }

    #[test]
    fn filter_from_params_prefers_search() {
        let filter = CatalogFilter::from_params(Some("react"), Some("Finance"));
        assert_eq!(filter, CatalogFilter::Search("react".to_string()));
        assert_eq!(ids(&filter.apply(&sample())), vec!["3"]);
    }

    #[test]
    fn filter_from_params_ignores_empty_values() {
        assert_eq!(CatalogFilter::from_params(Some(""), None), CatalogFilter::All);
        assert_eq!(
            CatalogFilter::from_params(Some(""), Some("Finance")),
            CatalogFilter::Category("Finance".to_string())
        );
        assert_eq!(CatalogFilter::from_params(None, Some("")), CatalogFilter::All);
    }

    #[test]
    fn courses_in_package_follows_package_order_and_skips_dangling() {
        let courses = sample();
        let package = Package::from_draft(
            EntityId::new("p1").unwrap(),
            Timestamp::now(),
            crate::domain::catalog::NewPackage {
                title: "Bundle".to_string(),
                course_ids: ["3", "missing", "1"]
                    .into_iter()
                    .map(|id| EntityId::new(id).unwrap())
                    .collect(),
                ..Default::default()
            },
        );

        assert_eq!(ids(&courses_in_package(&package, &courses)), vec!["3", "1"]);
    }

    proptest! {
        #[test]
        fn by_category_is_case_insensitive(category in "[A-Za-z]{1,12}") {
            let courses = vec![
                course("1", "A", None, &category),
                course("2", "B", None, "Other"),
            ];
            let lower = by_category(&courses, &category.to_lowercase());
            let upper = by_category(&courses, &category.to_uppercase());
            prop_assert_eq!(&lower, &upper);
            prop_assert!(lower.iter().any(|c| c.id.as_str() == "1"));
        }

        #[test]
        fn search_results_are_a_subsequence(text in "[a-z ]{0,6}") {
            let courses = sample();
            let found = search(&courses, &text);
            let mut remaining = courses.iter();
            for hit in &found {
                prop_assert!(remaining.any(|c| c == hit));
            }
        }
    }
}
