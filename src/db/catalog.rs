//! Global lists that populate the filter pickers. Blank placeholder rows exist
//! in the lookup tables to mean "no preference", so they are skipped here.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{Major, MajorOrder};

/// Every major with a non-blank name.
pub fn fetch_all_majors(conn: &Connection, order: MajorOrder) -> Result<Vec<Major>> {
    let sql = match order {
        MajorOrder::Name => {
            "SELECT name, COALESCE(abbreviation, '') FROM major
             WHERE name <> '' ORDER BY name, abbreviation"
        }
        MajorOrder::Abbreviation => {
            "SELECT name, COALESCE(abbreviation, '') FROM major
             WHERE name <> '' ORDER BY abbreviation, name"
        }
    };

    let mut stmt = conn.prepare(sql).context("failed to prepare major query")?;

    let majors = stmt
        .query_map([], |row| Ok(Major::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .context("failed to load majors")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect majors")?;

    Ok(majors)
}

/// Major names for the picker that lists majors by their full name. Rows
/// without a name are skipped instead of failing the list.
pub fn fetch_major_names(conn: &Connection) -> Result<Vec<String>> {
    fetch_strings(
        conn,
        "SELECT name FROM major WHERE name IS NOT NULL ORDER BY name",
        "major names",
    )
}

/// Abbreviations in the order the compact major picker shows them. These are
/// the values a [`crate::CompanyFilter`] expects.
pub fn fetch_major_abbreviations(conn: &Connection) -> Result<Vec<String>> {
    fetch_strings(
        conn,
        "SELECT abbreviation FROM major WHERE abbreviation IS NOT NULL ORDER BY abbreviation",
        "major abbreviations",
    )
}

/// Work authorization choices for the filter screen. The blank "no
/// preference" type is never offered as a choice.
pub fn fetch_work_auths(conn: &Connection) -> Result<Vec<String>> {
    fetch_strings(
        conn,
        "SELECT type FROM workAuth WHERE type <> '' ORDER BY type",
        "work authorizations",
    )
}

/// Employment types for the filter screen, again without the blank type.
pub fn fetch_positions(conn: &Connection) -> Result<Vec<String>> {
    fetch_strings(
        conn,
        "SELECT type FROM employmentType WHERE type <> '' ORDER BY type",
        "positions",
    )
}

/// Shared single-column reader for the lists above.
fn fetch_strings(conn: &Connection, sql: &str, what: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(sql)
        .with_context(|| format!("failed to prepare {what} query"))?;

    let mut rows = stmt
        .query([])
        .with_context(|| format!("failed to execute {what} query"))?;

    let mut values = Vec::new();
    while let Some(row) = rows.next().with_context(|| format!("failed to fetch {what} row"))? {
        let value: String = row
            .get(0)
            .with_context(|| format!("failed to read {what} value"))?;
        values.push(value);
    }

    Ok(values)
}
