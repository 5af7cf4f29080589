use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{Connection, Row};
use tracing::info;

use crate::models::Major;

/// Per-company attribute lists, loaded with one query per attribute instead of
/// one query per company. Built once per [`crate::Directory`] and never
/// refreshed.
#[derive(Debug, Clone, Default)]
pub struct LookupMaps {
    majors: HashMap<String, Vec<Major>>,
    positions: HashMap<String, Vec<String>>,
    work_auths: HashMap<String, Vec<String>>,
}

impl LookupMaps {
    /// Run the three grouped queries. Blank work-auth and position types are
    /// dropped so "no preference" companies end up with empty lists.
    pub fn load(conn: &Connection) -> Result<Self> {
        let majors = group_by_company(
            conn,
            "SELECT DISTINCT company.name,
                    COALESCE(major.name, ''),
                    COALESCE(major.abbreviation, '')
             FROM company
             INNER JOIN companyToMajor ON companyToMajor.companyID = company._id
             INNER JOIN major ON major._id = companyToMajor.majorID
             WHERE company.name IS NOT NULL
             ORDER BY major.abbreviation, major.name",
            |row| Ok(Major::new(row.get::<_, String>(1)?, row.get::<_, String>(2)?)),
        )
        .context("failed to load majors per company")?;

        let positions = group_by_company(
            conn,
            "SELECT DISTINCT company.name, employmentType.type
             FROM company
             INNER JOIN companyToType ON companyToType.companyID = company._id
             INNER JOIN employmentType ON employmentType._id = companyToType.typeID
             WHERE company.name IS NOT NULL AND employmentType.type <> ''
             ORDER BY employmentType.type",
            |row| row.get::<_, String>(1),
        )
        .context("failed to load positions per company")?;

        let work_auths = group_by_company(
            conn,
            "SELECT DISTINCT company.name, workAuth.type
             FROM company
             INNER JOIN companyToWorkAuth ON companyToWorkAuth.companyID = company._id
             INNER JOIN workAuth ON workAuth._id = companyToWorkAuth.workAuthID
             WHERE company.name IS NOT NULL AND workAuth.type <> ''
             ORDER BY workAuth.type",
            |row| row.get::<_, String>(1),
        )
        .context("failed to load work authorizations per company")?;

        info!(
            majors = majors.len(),
            positions = positions.len(),
            work_auths = work_auths.len(),
            "built company lookup maps"
        );

        Ok(Self {
            majors,
            positions,
            work_auths,
        })
    }

    /// Majors for `company`, ordered by abbreviation.
    pub fn majors_for(&self, company: &str) -> Vec<Major> {
        self.majors.get(company).cloned().unwrap_or_default()
    }

    pub fn positions_for(&self, company: &str) -> Vec<String> {
        self.positions.get(company).cloned().unwrap_or_default()
    }

    pub fn work_auths_for(&self, company: &str) -> Vec<String> {
        self.work_auths.get(company).cloned().unwrap_or_default()
    }
}

/// Run a `(company.name, ...)` query and bucket the mapped values by company,
/// keeping row order within each bucket.
fn group_by_company<T, F>(
    conn: &Connection,
    sql: &str,
    mut map_value: F,
) -> Result<HashMap<String, Vec<T>>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).context("failed to prepare lookup query")?;
    let mut rows = stmt.query([]).context("failed to execute lookup query")?;

    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    while let Some(row) = rows.next().context("failed to fetch lookup row")? {
        let company: String = row.get(0).context("failed to read company name")?;
        let value = map_value(row).context("failed to read lookup value")?;
        grouped.entry(company).or_default().push(value);
    }

    Ok(grouped)
}
