use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_APP_NAME, DEFAULT_CATALOG_PATH};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_log_level, validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional planner configuration file.
///
/// ```toml
/// [app]
/// name = "course planner"
///
/// [catalog]
/// path = "${COURSE_DATA_DIR}/courses.csv"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as
    /// written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env var pattern: {}", e))
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Command line `--catalog` wins over the file.
    pub fn override_catalog_path(&mut self, path: Option<String>) {
        if let Some(path) = path {
            tracing::info!("Catalog path overridden to: {}", path);
            self.catalog.path = Some(path);
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> &str {
        self.catalog.path.as_deref().unwrap_or(DEFAULT_CATALOG_PATH)
    }

    fn app_name(&self) -> &str {
        self.app.name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.path", self.catalog_path())?;
        validate_non_empty_string("app.name", self.app_name())?;
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[app]
name = "advising planner"

[catalog]
path = "data/courses.csv"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.app_name(), "advising planner");
        assert_eq!(config.catalog_path(), "data/courses.csv");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.catalog_path(), DEFAULT_CATALOG_PATH);
        assert_eq!(config.app_name(), DEFAULT_APP_NAME);
        assert!(config.log_level().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COURSE_PLANNER_TEST_DIR", "/srv/advising");

        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "${COURSE_PLANNER_TEST_DIR}/courses.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog_path(), "/srv/advising/courses.csv");

        std::env::remove_var("COURSE_PLANNER_TEST_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_literal() {
        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "${COURSE_PLANNER_SURELY_UNSET}/courses.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog_path(), "${COURSE_PLANNER_SURELY_UNSET}/courses.csv");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[catalog\npath = 1").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let blank_name = TomlConfig::from_toml_str("[app]\nname = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());

        let empty_path = TomlConfig::from_toml_str("[catalog]\npath = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_override_catalog_path() {
        let mut config = TomlConfig::from_toml_str("[catalog]\npath = \"a.csv\"\n").unwrap();

        config.override_catalog_path(None);
        assert_eq!(config.catalog_path(), "a.csv");

        config.override_catalog_path(Some("b.csv".to_string()));
        assert_eq!(config.catalog_path(), "b.csv");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\npath = \"from-file.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog_path(), "from-file.csv");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/planner.toml").unwrap_err();
        assert!(matches!(err, PlannerError::IoError(_)));
    }
}
