use crate::core::parser::{parse_line, strip_line_ending};
use crate::core::store::CourseStore;
use crate::domain::model::{Course, LoadSummary, SkippedLine};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::BufRead;

pub struct CatalogLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> CatalogLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the catalog at `path` and replaces the store's contents with it.
    ///
    /// The store is only touched once the whole file has been read, so an
    /// open or read failure keeps the previous catalog. Malformed lines are
    /// skipped and reported in the summary.
    pub fn load_into(&self, path: &str, store: &mut CourseStore) -> Result<LoadSummary> {
        let reader = match self.storage.open(path) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::debug!("Could not open catalog {}: {}", path, e);
                return Err(e);
            }
        };

        let (courses, skipped) = read_courses(reader)?;
        let summary = LoadSummary {
            loaded: courses.len(),
            skipped,
        };
        store.replace(courses);

        tracing::info!(
            "Loaded {} courses from {} ({} lines skipped)",
            summary.loaded,
            path,
            summary.skipped.len()
        );
        Ok(summary)
    }
}

fn read_courses(mut reader: Box<dyn BufRead>) -> Result<(Vec<Course>, Vec<SkippedLine>)> {
    let mut courses = Vec::new();
    let mut skipped = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let raw = String::from_utf8_lossy(&buf);
        match parse_line(strip_line_ending(&raw)) {
            Ok(course) => courses.push(course),
            Err(e) => {
                tracing::debug!("Skipping line {}: {}", line_number, e);
                skipped.push(SkippedLine {
                    line_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((courses, skipped))
}
