//! Append-only coordinate output file.
//!
//! Each successful log call appends one human-readable line:
//!
//! ```text
//! [Farm] X: 12, Y: 7 (player)
//! ```
//!
//! The trailing target is only written when the record-target option is on.

use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::LogError;
use crate::state::TrackingTarget;

/// File name of the coordinate log inside the mod directory.
pub const OUTPUT_FILE_NAME: &str = "coordinate_output.txt";

/// One line of the coordinate log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub map_name: &'a str,
    pub coordinate: Coordinate,
    pub target: TrackingTarget,
    /// Append the tracking target to the line.
    pub record_target: bool,
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control characters would split the record across lines.
        f.write_char('[')?;
        for ch in self.map_name.chars() {
            f.write_char(if ch.is_control() { ' ' } else { ch })?;
        }
        write!(f, "] X: {}, Y: {}", self.coordinate.x, self.coordinate.y)?;
        if self.record_target {
            write!(f, " ({})", self.target)?;
        }
        Ok(())
    }
}

/// Writes [`LogRecord`]s to a text file in append mode.
#[derive(Clone, Debug)]
pub struct CoordinateLogger {
    path: PathBuf,
}

impl CoordinateLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Logger targeting [`OUTPUT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(OUTPUT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line. The parent directory must already exist.
    pub fn append(&self, record: &LogRecord<'_>) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LogError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{record}")
            .and_then(|()| file.flush())
            .map_err(|source| LogError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Appends one line, reporting failure as `false` instead of an error.
    pub fn log(&self, record: &LogRecord<'_>) -> bool {
        match self.append(record) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(
                    target: "coords::logger",
                    path = %self.path.display(),
                    error = %error,
                    "Failed to append coordinates"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn farm_record(record_target: bool) -> LogRecord<'static> {
        LogRecord {
            map_name: "Farm",
            coordinate: Coordinate::new(12, 7),
            target: TrackingTarget::Player,
            record_target,
        }
    }

    #[test]
    fn logs_map_coordinate_and_target() {
        let temp_dir = TempDir::new().unwrap();
        let logger = CoordinateLogger::in_dir(temp_dir.path());

        assert!(logger.log(&farm_record(true)));

        let contents = fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents, "[Farm] X: 12, Y: 7 (player)\n");
        assert!(contents.contains("Farm"));
        assert!(contents.contains("12"));
        assert!(contents.contains('7'));
        assert!(contents.contains("player"));
    }

    #[test]
    fn omits_target_when_not_recorded() {
        assert_eq!(farm_record(false).to_string(), "[Farm] X: 12, Y: 7");
    }

    #[test]
    fn control_characters_in_map_name_stay_on_one_line() {
        let record = LogRecord {
            map_name: "Cave\r\nLevel\t2",
            ..farm_record(false)
        };

        assert_eq!(record.to_string(), "[Cave  Level 2] X: 12, Y: 7");
    }

    #[test]
    fn appends_instead_of_truncating() {
        let temp_dir = TempDir::new().unwrap();
        let logger = CoordinateLogger::in_dir(temp_dir.path());

        assert!(logger.log(&farm_record(false)));
        let cursor = LogRecord {
            map_name: "Town",
            coordinate: Coordinate::new(-3, 40),
            target: TrackingTarget::Cursor,
            record_target: true,
        };
        assert!(logger.log(&cursor));

        let contents = fs::read_to_string(logger.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines, ["[Farm] X: 12, Y: 7", "[Town] X: -3, Y: 40 (cursor)"]);
    }

    #[test]
    fn missing_directory_fails_without_creating_it() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let logger = CoordinateLogger::in_dir(&missing);

        assert!(matches!(
            logger.append(&farm_record(true)),
            Err(LogError::Open { .. })
        ));
        assert!(!logger.log(&farm_record(true)));
        assert!(!missing.exists());
    }

    #[test]
    fn failed_write_leaves_existing_file_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join(OUTPUT_FILE_NAME);
        fs::write(&existing, "[Farm] X: 1, Y: 1\n").unwrap();

        let logger = CoordinateLogger::in_dir(temp_dir.path().join("missing"));
        assert!(!logger.log(&farm_record(true)));

        assert_eq!(fs::read_to_string(&existing).unwrap(), "[Farm] X: 1, Y: 1\n");
    }
}
