use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create the directory schema on a writable connection. The shipped database
/// already contains it; this exists for provisioning tools and fixtures.
pub fn install_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS company (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            website TEXT NOT NULL DEFAULT ''
        );
        CREATE TABLE IF NOT EXISTS room (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        CREATE TABLE IF NOT EXISTS location (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            tableNum TEXT NOT NULL,
            roomID INTEGER NOT NULL REFERENCES room(_id)
        );
        CREATE TABLE IF NOT EXISTS major (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            abbreviation TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS workAuth (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS employmentType (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS companyToLocation (
            companyID INTEGER NOT NULL REFERENCES company(_id),
            locationID INTEGER NOT NULL REFERENCES location(_id),
            PRIMARY KEY (companyID, locationID)
        );
        CREATE TABLE IF NOT EXISTS companyToMajor (
            companyID INTEGER NOT NULL REFERENCES company(_id),
            majorID INTEGER NOT NULL REFERENCES major(_id),
            PRIMARY KEY (companyID, majorID)
        );
        CREATE TABLE IF NOT EXISTS companyToWorkAuth (
            companyID INTEGER NOT NULL REFERENCES company(_id),
            workAuthID INTEGER NOT NULL REFERENCES workAuth(_id),
            PRIMARY KEY (companyID, workAuthID)
        );
        CREATE TABLE IF NOT EXISTS companyToType (
            companyID INTEGER NOT NULL REFERENCES company(_id),
            typeID INTEGER NOT NULL REFERENCES employmentType(_id),
            PRIMARY KEY (companyID, typeID)
        );",
    )
    .context("failed to create career fair schema")?;

    Ok(())
}
