//! The session object the UI talks to. It owns the database connection, the
//! lazily built lookup maps, and the results of the last filter and search.
//! One `Directory` serves one logical caller; it is neither `Sync` nor meant to
//! be shared across threads.

use std::cell::OnceCell;
use std::collections::HashMap;

use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

use crate::cache::{FilterOutcome, LastResults};
use crate::config::DirectoryConfig;
use crate::db::{self, query, CompanyFilter, CompanyQuery, LookupMaps};
use crate::models::{Company, CompanyKey, Major, MajorKey, MajorOrder, Room};

/// One open directory session. Construct it once when the app starts and pass
/// it by reference to the screens that list or filter companies.
pub struct Directory {
    conn: Connection,
    maps: OnceCell<LookupMaps>,
    last: LastResults,
}

impl Directory {
    /// Open the configured database read-only.
    pub fn open(config: &DirectoryConfig) -> Result<Self> {
        let conn = db::open_database(config)?;
        Ok(Self::new(conn))
    }

    /// Wrap an already open connection, e.g. an in-memory fixture.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        db::prepare_connection(&conn)?;
        db::verify_schema(&conn)?;
        Ok(Self::new(conn))
    }

    fn new(conn: Connection) -> Self {
        Self {
            conn,
            maps: OnceCell::new(),
            last: LastResults::default(),
        }
    }

    /// Underlying connection, for callers that need a query this type does
    /// not offer.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Lookup maps, built on first use and kept for the life of the session.
    fn lookup_maps(&self) -> Result<&LookupMaps> {
        if let Some(maps) = self.maps.get() {
            return Ok(maps);
        }
        let maps = LookupMaps::load(&self.conn)?;
        Ok(self.maps.get_or_init(|| maps))
    }

    fn load_companies(&self, query: &CompanyQuery) -> Result<Vec<Company>> {
        let rows = db::fetch_company_rows(&self.conn, query)?;
        let maps = self.lookup_maps()?;
        Ok(rows.into_iter().map(|row| row.into_company(maps)).collect())
    }

    /// Every company with a table, in natural name order.
    pub fn all_companies(&self) -> Result<Vec<Company>> {
        self.load_companies(&query::all_companies_query())
    }

    /// Every company name, including companies that have no table yet. The
    /// name list view uses this before the user applies any filter.
    pub fn company_names(&self) -> Result<Vec<String>> {
        db::fetch_company_names(&self.conn)
    }

    /// Companies whose name contains `term`; an empty term lists everything.
    /// The matched names are remembered for [`Directory::searched_names`].
    pub fn search_companies(&mut self, term: &str) -> Result<Vec<Company>> {
        let companies = self.load_companies(&query::search_query(term))?;
        debug!(term, matches = companies.len(), "searched companies");
        self.last.record_search(&companies);
        Ok(companies)
    }

    /// Companies matching every active dimension of `filter`. The result and
    /// its blank/full split replace the previously remembered filter outcome.
    pub fn filter_companies(&mut self, filter: &CompanyFilter) -> Result<Vec<Company>> {
        let companies = self.load_companies(&query::filter_query(filter))?;
        let outcome = FilterOutcome::partition(filter, &companies);
        debug!(
            matches = outcome.names.len(),
            blank = outcome.blank.len(),
            "filtered companies"
        );
        self.last.record_filter(outcome);
        Ok(companies)
    }

    /// Names from the last filter, or every company name if no filter has run
    /// in this session.
    pub fn filtered_names(&self) -> Result<Vec<String>> {
        match self.last.filtered_names() {
            Some(names) => Ok(names),
            None => self.company_names(),
        }
    }

    /// Last-filter matches with no recorded value for an active dimension.
    pub fn blank_matches(&self) -> Vec<Company> {
        self.last.blank_matches()
    }

    /// Names of [`Directory::blank_matches`], in listing order.
    pub fn blank_match_names(&self) -> Vec<String> {
        names_of(&self.last.blank_matches())
    }

    /// Last-filter matches with a recorded value for every active dimension.
    pub fn full_matches(&self) -> Vec<Company> {
        self.last.full_matches()
    }

    /// Names of [`Directory::full_matches`], in listing order.
    pub fn full_match_names(&self) -> Vec<String> {
        names_of(&self.last.full_matches())
    }

    /// Names returned by the last search, empty before the first one. The
    /// search screen re-reads these after returning from a detail view.
    pub fn searched_names(&self) -> Vec<String> {
        self.last.searched_names()
    }

    /// Majors a company recruits, served from the session's lookup maps so the
    /// detail screen does not query per company. Unknown names give `[]`.
    pub fn majors_for(&self, company: &str) -> Result<Vec<Major>> {
        Ok(self.lookup_maps()?.majors_for(company))
    }

    /// Employment types a company is hiring for; `[]` when none are recorded.
    pub fn positions_for(&self, company: &str) -> Result<Vec<String>> {
        Ok(self.lookup_maps()?.positions_for(company))
    }

    /// Work authorizations a company accepts; `[]` when none are recorded.
    pub fn work_auths_for(&self, company: &str) -> Result<Vec<String>> {
        Ok(self.lookup_maps()?.work_auths_for(company))
    }

    /// Every major for the filter picker, sorted by name or abbreviation.
    pub fn all_majors(&self, order: MajorOrder) -> Result<Vec<Major>> {
        db::fetch_all_majors(&self.conn, order)
    }

    /// Major names ordered alphabetically.
    pub fn all_major_names(&self) -> Result<Vec<String>> {
        db::fetch_major_names(&self.conn)
    }

    /// Major abbreviations ordered alphabetically; these feed
    /// [`CompanyFilter::majors`].
    pub fn all_major_abbreviations(&self) -> Result<Vec<String>> {
        db::fetch_major_abbreviations(&self.conn)
    }

    /// Work authorization choices, blank "no preference" type excluded.
    pub fn all_work_auths(&self) -> Result<Vec<String>> {
        db::fetch_work_auths(&self.conn)
    }

    /// Employment type choices, blank "no preference" type excluded.
    pub fn all_positions(&self) -> Result<Vec<String>> {
        db::fetch_positions(&self.conn)
    }

    /// Companies in `room` keyed by table number, for the floor map.
    pub fn companies_by_table(&self, room: Room) -> Result<HashMap<String, Company>> {
        let in_room: Vec<Company> = self
            .all_companies()?
            .into_iter()
            .filter(|company| company.room == room.as_str())
            .collect();
        Ok(index_companies(CompanyKey::TableNumber, &in_room))
    }
}

fn names_of(companies: &[Company]) -> Vec<String> {
    companies.iter().map(|c| c.name.clone()).collect()
}

/// Index companies by the selected field. Later entries win on key clashes.
pub fn index_companies(key: CompanyKey, companies: &[Company]) -> HashMap<String, Company> {
    companies
        .iter()
        .map(|company| {
            let k = match key {
                CompanyKey::Name => company.name.clone(),
                CompanyKey::TableNumber => company.table_number.clone(),
            };
            (k, company.clone())
        })
        .collect()
}

/// Index majors by the selected field. Later entries win on key clashes.
pub fn index_majors(key: MajorKey, majors: &[Major]) -> HashMap<String, Major> {
    majors
        .iter()
        .map(|major| {
            let k = match key {
                MajorKey::Name => major.name.clone(),
                MajorKey::Abbreviation => major.abbreviation.clone(),
            };
            (k, major.clone())
        })
        .collect()
}
