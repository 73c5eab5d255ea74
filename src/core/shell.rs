//! Menu dispatch for the interactive planner.
//!
//! [`Shell::dispatch`] maps a menu choice (and, for lookups, the course number
//! the user typed) to the lines to print and the next [`ShellState`]. It never
//! touches the console; [`crate::core::session::Session`] does the reading and
//! writing.

use crate::core::loader::CatalogLoader;
use crate::core::store::CourseStore;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::PlannerError;

pub const MENU_LINES: [&str; 4] = [
    "1. Load Data Structure.",
    "2. Print Course List.",
    "3. Print Course.",
    "9. Exit",
];
pub const CHOICE_PROMPT: &str = "What would you like to do? ";
pub const QUERY_PROMPT: &str = "What course do you want to know about? ";
pub const LOAD_FIRST: &str = "Please load the data first.";
pub const LIST_HEADER: &str = "Here is a sample schedule:";
pub const NOT_FOUND: &str = "Course not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Find,
    Exit,
    /// Anything else, holding the number to echo back.
    Invalid(String),
}

impl MenuChoice {
    /// Parses one token of user input. Non-numeric text is never an error:
    /// it reads as choice `0`, so `abc` is reported as `0 is not a valid
    /// option.` like a failed integer read.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(1) => MenuChoice::Load,
            Ok(2) => MenuChoice::List,
            Ok(3) => MenuChoice::Find,
            Ok(9) => MenuChoice::Exit,
            Ok(other) => MenuChoice::Invalid(other.to_string()),
            Err(_) => MenuChoice::Invalid("0".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub state: ShellState,
    pub lines: Vec<String>,
}

impl Reply {
    fn running(lines: Vec<String>) -> Self {
        Self {
            state: ShellState::Running,
            lines,
        }
    }
}

pub struct Shell<S: Storage, C: ConfigProvider> {
    loader: CatalogLoader<S>,
    store: CourseStore,
    config: C,
    state: ShellState,
}

impl<S: Storage, C: ConfigProvider> Shell<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            loader: CatalogLoader::new(storage),
            store: CourseStore::new(),
            config,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub fn app_name(&self) -> &str {
        self.config.app_name()
    }

    /// Whether `choice` needs a course number from the user before dispatch.
    pub fn wants_query(&self, choice: &MenuChoice) -> bool {
        *choice == MenuChoice::Find && self.store.is_loaded()
    }

    pub fn dispatch(&mut self, choice: &MenuChoice, query: Option<&str>) -> Reply {
        tracing::debug!("Dispatching {:?}", choice);
        let reply = match choice {
            MenuChoice::Load => Reply::running(self.load()),
            MenuChoice::List => Reply::running(self.list()),
            MenuChoice::Find => Reply::running(self.find(query.unwrap_or_default())),
            MenuChoice::Exit => Reply {
                state: ShellState::Terminated,
                lines: vec![format!("Thank you for using the {}!", self.config.app_name())],
            },
            MenuChoice::Invalid(value) => {
                Reply::running(vec![format!("{} is not a valid option.", value)])
            }
        };
        self.state = reply.state;
        reply
    }

    fn load(&mut self) -> Vec<String> {
        let path = self.config.catalog_path();
        match self.loader.load_into(path, &mut self.store) {
            Ok(summary) => {
                let mut lines: Vec<String> = summary
                    .skipped
                    .iter()
                    .map(|skipped| format!("Error: line {}: {}", skipped.line_number, skipped.reason))
                    .collect();
                lines.push("Data loaded successfully.".to_string());
                lines
            }
            Err(e) => {
                let detail = match e {
                    PlannerError::CatalogNotFound { .. } => "Error: File not found".to_string(),
                    other => format!("Error: {}", other.user_friendly_message()),
                };
                vec![detail, "Failed to load data.".to_string()]
            }
        }
    }

    fn list(&self) -> Vec<String> {
        if !self.store.is_loaded() {
            return vec![LOAD_FIRST.to_string()];
        }
        std::iter::once(LIST_HEADER.to_string())
            .chain(
                self.store
                    .list_sorted_by_number()
                    .iter()
                    .map(|course| course.to_string()),
            )
            .collect()
    }

    fn find(&self, query: &str) -> Vec<String> {
        if !self.store.is_loaded() {
            return vec![LOAD_FIRST.to_string()];
        }
        match self.store.find_by_number(query) {
            Some(course) => vec![course.to_string(), course.prerequisites_line()],
            None => vec![NOT_FOUND.to_string()],
        }
    }
}
