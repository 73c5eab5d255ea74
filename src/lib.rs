pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{session::Session, shell::Shell, store::CourseStore};
pub use domain::model::Course;
pub use utils::error::{PlannerError, Result};
