use anyhow::{Context, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use tracing::info;

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;

use super::query::company_sort_key;

/// Tables the directory queries. The database is produced by packaging, so we
/// only check that they exist.
pub const REQUIRED_TABLES: [&str; 10] = [
    "company",
    "location",
    "room",
    "major",
    "workAuth",
    "employmentType",
    "companyToLocation",
    "companyToMajor",
    "companyToWorkAuth",
    "companyToType",
];

/// Open the bundled database read-only, register the SQL helpers the queries
/// rely on, and confirm the expected tables are present.
pub fn open_database(config: &DirectoryConfig) -> Result<Connection> {
    let path = config.db_path();
    if !path.exists() {
        return Err(DirectoryError::MissingDatabase(path.to_path_buf()).into());
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open career fair database at {}", path.display()))?;

    prepare_connection(&conn)?;
    verify_schema(&conn)?;

    info!(path = %path.display(), "opened career fair database");
    Ok(conn)
}

/// Register `company_sort_key(name)` so every `ORDER BY` shares the natural
/// ordering implemented in Rust.
pub fn prepare_connection(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "company_sort_key",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let name: Option<String> = ctx.get(0)?;
            Ok(name.map(|name| company_sort_key(&name)))
        },
    )
    .context("failed to register company_sort_key")?;
    Ok(())
}

/// Fail with [`DirectoryError::MissingTable`] naming the first absent table.
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let mut stmt = conn
        .prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .context("failed to prepare schema check")?;

    for table in REQUIRED_TABLES {
        let found: i64 = stmt
            .query_row([table], |row| row.get(0))
            .with_context(|| format!("failed to look up table {table}"))?;
        if found == 0 {
            return Err(DirectoryError::MissingTable(table.to_string()).into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::install_schema;

    #[test]
    fn open_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::new(dir.path().join("absent.db"));

        let err = open_database(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::MissingDatabase(_))
        ));
    }

    #[test]
    fn open_reports_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "CREATE TABLE company (_id INTEGER PRIMARY KEY, name TEXT, website TEXT)",
                [],
            )
            .unwrap();
        }

        let err = open_database(&DirectoryConfig::new(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::MissingTable(table)) if table == "location"
        ));
    }

    #[test]
    fn open_accepts_provisioned_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fair.db");
        {
            let conn = Connection::open(&path).unwrap();
            install_schema(&conn).unwrap();
        }

        let conn = open_database(&DirectoryConfig::new(&path)).unwrap();
        let key: String = conn
            .query_row("SELECT company_sort_key('The Acme Co.')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(key, "acmeco");

        let missing: Option<String> = conn
            .query_row("SELECT company_sort_key(NULL)", [], |row| row.get(0))
            .unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn opened_database_rejects_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fair.db");
        {
            let conn = Connection::open(&path).unwrap();
            install_schema(&conn).unwrap();
        }

        let conn = open_database(&DirectoryConfig::new(&path)).unwrap();
        assert!(conn
            .execute("INSERT INTO room (name) VALUES ('Wood')", [])
            .is_err());
    }
}
