use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::DirectoryError;

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "CAREER_FAIR_DB";
/// Folder name used beneath the user's home directory for the bundled data.
const DATA_DIR_NAME: &str = ".career-fair-directory";
/// SQLite file shipped with the application.
const DB_FILE_NAME: &str = "careerFairDB.db";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the pre-populated directory database lives.
pub struct DirectoryConfig {
    pub db_path: PathBuf,
}

impl DirectoryConfig {
    /// Point at a specific database file, e.g. one unpacked from the app
    /// bundle or a fixture written by tests.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolve the database path from `CAREER_FAIR_DB`, falling back to the
    /// default file inside the user's home.
    pub fn from_env() -> Result<Self, DirectoryError> {
        Self::resolve(env::var_os(DB_PATH_ENV).map(PathBuf::from))
    }

    fn resolve(override_path: Option<PathBuf>) -> Result<Self, DirectoryError> {
        match override_path {
            Some(path) if !path.as_os_str().is_empty() => Ok(Self::new(path)),
            _ => default_db_path().map(Self::new),
        }
    }

    /// Location handed to [`crate::db::open_database`].
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// Default install location: `careerFairDB.db` in a dot-folder under home.
fn default_db_path() -> Result<PathBuf, DirectoryError> {
    let base_dirs = BaseDirs::new().ok_or(DirectoryError::NoHomeDirectory)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let config = DirectoryConfig::resolve(Some(PathBuf::from("/tmp/fair.db"))).unwrap();
        assert_eq!(config.db_path(), Path::new("/tmp/fair.db"));
    }

    #[test]
    fn empty_override_falls_back_to_home() {
        // Skip on sandboxes without a resolvable home directory.
        let Ok(config) = DirectoryConfig::resolve(Some(PathBuf::new())) else {
            return;
        };
        assert!(config.db_path().ends_with(Path::new(DATA_DIR_NAME).join(DB_FILE_NAME)));
    }
}
