//! Checked error conditions callers are expected to match on. Database access
//! failures travel as `anyhow::Error` with context; these variants are wrapped
//! into it where they originate inside a database operation, so callers can
//! recover them with `downcast_ref`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// An index key selector named a field that cannot be used as a key.
    #[error("invalid index selector: {0}")]
    InvalidSelector(String),

    /// Room text outside the venue's fixed set.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// The configured file does not exist; read-only opens never create it.
    #[error("career fair database not found at {}", .0.display())]
    MissingDatabase(PathBuf),

    /// The file opened but was not produced by the directory packaging.
    #[error("career fair database is missing table `{0}`")]
    MissingTable(String),

    #[error("could not locate home directory")]
    NoHomeDirectory,
}
