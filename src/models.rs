//! Domain models that mirror the career fair schema and get handed to the UI
//! layer. They stay plain data holders; all querying lives in `db` and
//! `directory`.

use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An academic major a company recruits. Both fields come straight from the
/// `major` table.
pub struct Major {
    /// Full display name, e.g. "Computer Science".
    pub name: String,
    /// Short code used by the filter UI, e.g. "CS".
    pub abbreviation: String,
}

impl Major {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A company attending the fair together with everything the detail screen
/// shows about it. The list fields are empty, never missing, when the database
/// holds no rows for them.
pub struct Company {
    /// Business key; unique across the directory.
    pub name: String,
    pub website: String,
    /// Venue-assigned table number. Kept as text because venues use labels
    /// such as "12A".
    pub table_number: String,
    /// Name of the room the table is in (see [`Room`]).
    pub room: String,
    pub majors: Vec<Major>,
    /// Employment types the company is hiring for.
    pub positions: Vec<String>,
    /// Work authorizations the company accepts.
    pub work_auths: Vec<String>,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The fixed set of venue sections a table can be placed in.
pub enum Room {
    Wood,
    Multipurpose,
    Hall,
}

impl Room {
    pub const ALL: [Room; 3] = [Room::Wood, Room::Multipurpose, Room::Hall];

    /// Value stored in `room.name`.
    pub fn as_str(self) -> &'static str {
        match self {
            Room::Wood => "Wood",
            Room::Multipurpose => "Multipurpose",
            Room::Hall => "Hall",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Room {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Room::ALL
            .into_iter()
            .find(|room| room.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DirectoryError::UnknownRoom(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Field used as the key when indexing a list of companies.
pub enum CompanyKey {
    Name,
    TableNumber,
}

impl FromStr for CompanyKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(CompanyKey::Name),
            "table" | "table_number" | "tablenum" => Ok(CompanyKey::TableNumber),
            _ => Err(DirectoryError::InvalidSelector(s.to_string())),
        }
    }
}

/// Legacy numeric selectors: `0` keys by name, `1` by table number.
impl TryFrom<i64> for CompanyKey {
    type Error = DirectoryError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CompanyKey::Name),
            1 => Ok(CompanyKey::TableNumber),
            other => Err(DirectoryError::InvalidSelector(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Field used as the key when indexing a list of majors.
pub enum MajorKey {
    Name,
    Abbreviation,
}

impl FromStr for MajorKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(MajorKey::Name),
            "abbreviation" | "abbrev" => Ok(MajorKey::Abbreviation),
            _ => Err(DirectoryError::InvalidSelector(s.to_string())),
        }
    }
}

/// Legacy numeric selectors: `0` keys by name, `1` by abbreviation.
impl TryFrom<i64> for MajorKey {
    type Error = DirectoryError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MajorKey::Name),
            1 => Ok(MajorKey::Abbreviation),
            other => Err(DirectoryError::InvalidSelector(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Ordering for the global major list.
pub enum MajorOrder {
    #[default]
    Name,
    Abbreviation,
}
