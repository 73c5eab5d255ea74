pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_APP_NAME, DEFAULT_CATALOG_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "course-planner"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Browse a course catalog and look up prerequisites")
)]
pub struct CliConfig {
    /// Catalog file to load [default: CS 300 ABCU_Advising_Program_Input.csv]
    #[cfg_attr(feature = "cli", arg(long))]
    pub catalog: Option<String>,

    /// Optional TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_path(&self) -> &str {
        self.catalog.as_deref().unwrap_or(DEFAULT_CATALOG_PATH)
    }

    fn app_name(&self) -> &str {
        DEFAULT_APP_NAME
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--catalog", self.catalog_path())?;
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_path() {
        let config = CliConfig::default();
        assert_eq!(config.catalog_path(), DEFAULT_CATALOG_PATH);
        assert_eq!(config.app_name(), DEFAULT_APP_NAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_catalog_path_is_rejected() {
        let config = CliConfig {
            catalog: Some(String::new()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_arguments() {
        let config =
            CliConfig::parse_from(["course-planner", "--catalog", "data/courses.csv", "-v"]);
        assert_eq!(config.catalog_path(), "data/courses.csv");
        assert!(config.verbose);
        assert!(config.config.is_none());
    }
}
