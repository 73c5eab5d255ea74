use crate::domain::model::{normalize_course_number, Course};

/// In-memory catalog for the current session.
///
/// Starts unloaded. Every successful load replaces the whole catalog, and a
/// load of an empty file still counts as loaded.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
    loaded: bool,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.loaded = true;
    }

    /// First course whose number matches the normalized query.
    pub fn find_by_number(&self, query: &str) -> Option<&Course> {
        let wanted = normalize_course_number(query);
        self.courses
            .iter()
            .find(|course| course.course_number == wanted)
    }

    /// Copy of the catalog ordered by course number; duplicates keep their
    /// load order.
    pub fn list_sorted_by_number(&self) -> Vec<Course> {
        let mut sorted = self.courses.clone();
        sorted.sort_by(|a, b| a.course_number.cmp(&b.course_number));
        sorted
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str, name: &str) -> Course {
        Course::new(number, name, vec![])
    }

    fn sample_store() -> CourseStore {
        let mut store = CourseStore::new();
        store.replace(vec![
            course("CS300", "Algorithms"),
            course("CS101", "Intro to CS"),
            course("MATH201", "Discrete Math"),
            course("CS200", "Data Structures"),
        ]);
        store
    }

    #[test]
    fn test_new_store_is_unloaded_and_tolerates_queries() {
        let store = CourseStore::new();
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert!(store.find_by_number("CS101").is_none());
        assert!(store.list_sorted_by_number().is_empty());
    }

    #[test]
    fn test_find_by_number_is_case_and_whitespace_insensitive() {
        let store = sample_store();
        for query in ["cs101", " CS101 ", "CS101", "\tcS101\n"] {
            let found = store.find_by_number(query).expect("course should be found");
            assert_eq!(found.name, "Intro to CS");
        }
        assert!(store.find_by_number("CS999").is_none());
    }

    #[test]
    fn test_find_by_number_returns_first_duplicate() {
        let mut store = CourseStore::new();
        store.replace(vec![course("CS101", "First"), course("CS101", "Second")]);
        assert_eq!(store.find_by_number("cs101").unwrap().name, "First");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_sorted_by_number_is_lexicographic() {
        let store = sample_store();
        let numbers: Vec<String> = store
            .list_sorted_by_number()
            .into_iter()
            .map(|c| c.course_number)
            .collect();
        assert_eq!(numbers, vec!["CS101", "CS200", "CS300", "MATH201"]);
    }

    #[test]
    fn test_list_sorted_is_plain_string_order_and_stable() {
        let mut store = CourseStore::new();
        store.replace(vec![
            course("CS20", "Twenty"),
            course("CS100", "Hundred (first)"),
            course("CS3", "Three"),
            course("CS100", "Hundred (second)"),
        ]);
        let listed: Vec<String> = store
            .list_sorted_by_number()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            listed,
            vec![
                "CS100, Hundred (first)",
                "CS100, Hundred (second)",
                "CS20, Twenty",
                "CS3, Three",
            ]
        );
    }

    #[test]
    fn test_replace_discards_previous_catalog() {
        let mut store = sample_store();
        store.replace(vec![]);
        assert!(store.is_loaded());
        assert!(store.is_empty());
        assert!(store.find_by_number("CS101").is_none());
    }
}
