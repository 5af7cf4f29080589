use anyhow::{Context, Result};
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use crate::models::Company;

use super::lookup::LookupMaps;
use super::query::CompanyQuery;

/// Columns selected by every company listing, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub name: String,
    pub website: String,
    pub table_number: String,
    pub room: String,
}

impl CompanyRow {
    /// Attach majors, positions, and work authorizations from the lookup maps.
    /// Companies absent from a map get an empty list.
    pub fn into_company(self, maps: &LookupMaps) -> Company {
        Company {
            majors: maps.majors_for(&self.name),
            positions: maps.positions_for(&self.name),
            work_auths: maps.work_auths_for(&self.name),
            name: self.name,
            website: self.website,
            table_number: self.table_number,
            room: self.room,
        }
    }
}

/// Execute a built company query and return its rows in query order.
pub fn fetch_company_rows(conn: &Connection, query: &CompanyQuery) -> Result<Vec<CompanyRow>> {
    debug!(sql = %query.sql, params = query.params.len(), "running company query");

    let mut stmt = conn
        .prepare(&query.sql)
        .context("failed to prepare company query")?;

    let rows = stmt
        .query_map(params_from_iter(query.params.iter()), |row| {
            Ok(CompanyRow {
                name: row.get(0)?,
                website: row.get(1)?,
                table_number: row.get(2)?,
                room: row.get(3)?,
            })
        })
        .context("failed to load companies")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect companies")?;

    Ok(rows)
}

/// Every distinct company name, including companies without a table, in
/// natural display order.
pub fn fetch_company_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT name FROM company
             WHERE name IS NOT NULL
             ORDER BY company_sort_key(name), name",
        )
        .context("failed to prepare company name query")?;

    let names = stmt
        .query_map([], |row| row.get(0))
        .context("failed to load company names")?
        .collect::<Result<Vec<String>, _>>()
        .context("failed to collect company names")?;

    Ok(names)
}
