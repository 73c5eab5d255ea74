use crate::core::Storage;
use crate::utils::error::{PlannerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem storage; relative catalog paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>> {
        let full_path = self.resolve(path);
        tracing::debug!("Opening catalog file {}", full_path.display());

        match File::open(&full_path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlannerError::CatalogNotFound {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(PlannerError::IoError(e)),
        }
    }
}
