use crate::utils::error::Result;
use std::io::BufRead;

pub const DEFAULT_CATALOG_PATH: &str = "CS 300 ABCU_Advising_Program_Input.csv";
pub const DEFAULT_APP_NAME: &str = "course planner";

/// Where catalog files come from.
pub trait Storage {
    /// Opens `path` for line-by-line reading. A missing file must surface as
    /// `PlannerError::CatalogNotFound`.
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>>;
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn app_name(&self) -> &str;
}
