//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into the record store. The intent is to avoid
//! reading process-wide environment variables from inside operations, which
//! keeps behaviour consistent between the binary and test harnesses.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::DEFAULT_RECORDS_FILE;
use crate::error::ClinicError;

/// How reloaded rows are grouped back into patient records.
///
/// The records file carries one row per appointment, keyed by repeated
/// patient name; the grouping mode decides how those rows reconstitute
/// records. The two modes are a format-version difference: files written by
/// either are identical, only reloading differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowGrouping {
    /// Legacy behaviour: a row starts a new patient record only when its
    /// name differs (exact comparison) from the row above it. Rows for one
    /// name that are not contiguous become duplicate records.
    #[default]
    Adjacent,
    /// Corrected behaviour: rows group by name, case-insensitively,
    /// wherever they sit in the file. Opt-in via `--grouping merged`.
    Merged,
}

impl RowGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowGrouping::Adjacent => "adjacent",
            RowGrouping::Merged => "merged",
        }
    }
}

impl std::fmt::Display for RowGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowGrouping {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(RowGrouping::Adjacent),
            "merged" => Ok(RowGrouping::Merged),
            other => Err(ClinicError::UnknownGrouping(other.to_string())),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    records_path: PathBuf,
    grouping: RowGrouping,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(records_path: PathBuf, grouping: RowGrouping) -> Self {
        Self {
            records_path,
            grouping,
        }
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    pub fn grouping(&self) -> RowGrouping {
        self.grouping
    }
}

/// Resolve the records file path without reading environment variables.
///
/// `flag` is the command-line override and wins outright; `env_value` is the
/// raw value of the records-file environment variable, ignored when empty or
/// whitespace; otherwise the compiled-in default applies.
pub fn resolve_records_path(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_parses_both_modes() {
        assert_eq!("adjacent".parse::<RowGrouping>().unwrap(), RowGrouping::Adjacent);
        assert_eq!("merged".parse::<RowGrouping>().unwrap(), RowGrouping::Merged);
        assert!(matches!(
            "sorted".parse::<RowGrouping>(),
            Err(ClinicError::UnknownGrouping(_))
        ));
    }

    #[test]
    fn grouping_defaults_to_adjacent() {
        assert_eq!(RowGrouping::default(), RowGrouping::Adjacent);
        assert_eq!(RowGrouping::Adjacent.to_string(), "adjacent");
        assert_eq!(RowGrouping::Merged.to_string(), "merged");
    }

    #[test]
    fn records_path_resolution_prefers_flag_then_env_then_default() {
        assert_eq!(
            resolve_records_path(Some(PathBuf::from("/tmp/a.csv")), Some("/tmp/b.csv".into())),
            PathBuf::from("/tmp/a.csv")
        );
        assert_eq!(
            resolve_records_path(None, Some("/tmp/b.csv".into())),
            PathBuf::from("/tmp/b.csv")
        );
        assert_eq!(
            resolve_records_path(None, Some("   ".into())),
            PathBuf::from(DEFAULT_RECORDS_FILE)
        );
        assert_eq!(
            resolve_records_path(None, None),
            PathBuf::from(DEFAULT_RECORDS_FILE)
        );
    }
}
