pub mod loader;
pub mod parser;
pub mod session;
pub mod shell;
pub mod store;

pub use crate::domain::model::{Course, LoadSummary, SkippedLine};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
