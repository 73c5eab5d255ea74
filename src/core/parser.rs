use crate::domain::model::{normalize_course_number, Course};
use crate::utils::error::{PlannerError, Result};

pub const FIELD_DELIMITER: char = ',';

/// Splits a raw line on the field delimiter, keeping empty fields.
///
/// There is no quoting: a comma inside a name is a field separator.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// Removes a trailing `\n` or `\r\n`, nothing else.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses `courseNumber,name[,prerequisite]*` into a course.
///
/// Fewer than two fields, or a blank course number, is an invalid line.
/// Rejecting a blank number means not every line with two fields parses;
/// course numbers are kept non-empty instead. The name is kept literally. Prerequisites are normalized like course
/// numbers and blank ones are dropped.
pub fn parse_line(line: &str) -> Result<Course> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(PlannerError::InvalidLineFormat {
            fields: fields.len(),
        });
    }

    if fields[0].trim().is_empty() {
        return Err(PlannerError::MissingCourseNumber);
    }

    let prerequisites = fields[2..]
        .iter()
        .map(|field| normalize_course_number(field))
        .filter(|number| !number.is_empty())
        .collect();

    Ok(Course::new(fields[0], fields[1], prerequisites))
}
