use std::fmt;

/// Trims surrounding whitespace and uppercases a course number.
///
/// Stored course numbers and lookup queries both go through this, which is
/// what makes lookups case and whitespace insensitive.
pub fn normalize_course_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_number: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(course_number: &str, name: impl Into<String>, prerequisites: Vec<String>) -> Self {
        Self {
            course_number: normalize_course_number(course_number),
            name: name.into(),
            prerequisites,
        }
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// `Prerequisites: None` or the comma-joined prerequisite numbers.
    pub fn prerequisites_line(&self) -> String {
        if self.has_prerequisites() {
            format!("Prerequisites: {}", self.prerequisites.join(", "))
        } else {
            "Prerequisites: None".to_string()
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.course_number, self.name)
    }
}

/// Outcome of one catalog load that replaced the store's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub reason: String,
}
