//! SQL assembly for the company listings. Every statement starts from the same
//! company/location/room join and grows one INNER JOIN plus one `IN (...)`
//! predicate per active filter dimension. User-supplied values are always
//! bound as parameters; only fixed fragments are spliced into the text.

use crate::models::Room;

/// Major abbreviation used for companies that recruit every major.
pub const MAJOR_WILDCARD: &str = "ALL";
/// Work-auth / employment type value meaning "no preference recorded".
pub const UNSPECIFIED_TYPE: &str = "";

/// Descriptive columns may be NULL in the shipped database; they read as "".
const COMPANY_SELECT: &str = "SELECT DISTINCT company.name,
            COALESCE(company.website, ''),
            COALESCE(location.tableNum, ''),
            COALESCE(room.name, '')
     FROM company
     INNER JOIN companyToLocation
        ON companyToLocation.companyID = company._id AND company.name IS NOT NULL
     INNER JOIN location ON location._id = companyToLocation.locationID
     INNER JOIN room ON room._id = location.roomID";

const COMPANY_ORDER: &str = "ORDER BY company_sort_key(company.name), company.name";

/// Join + column for one filterable attribute.
struct Dimension {
    join: &'static str,
    column: &'static str,
    /// Always added to the bound set so "no preference" rows match.
    sentinel: &'static str,
}

const MAJOR_DIMENSION: Dimension = Dimension {
    join: "INNER JOIN companyToMajor ON companyToMajor.companyID = company._id
     INNER JOIN major ON major._id = companyToMajor.majorID",
    column: "major.abbreviation",
    sentinel: MAJOR_WILDCARD,
};

const WORK_AUTH_DIMENSION: Dimension = Dimension {
    join: "INNER JOIN companyToWorkAuth ON companyToWorkAuth.companyID = company._id
     INNER JOIN workAuth ON workAuth._id = companyToWorkAuth.workAuthID",
    column: "workAuth.type",
    sentinel: UNSPECIFIED_TYPE,
};

const POSITION_DIMENSION: Dimension = Dimension {
    join: "INNER JOIN companyToType ON companyToType.companyID = company._id
     INNER JOIN employmentType ON employmentType._id = companyToType.typeID",
    column: "employmentType.type",
    sentinel: UNSPECIFIED_TYPE,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Criteria for a filtered listing. An empty dimension does not filter.
/// Values within a dimension are OR-ed; active dimensions are AND-ed.
pub struct CompanyFilter {
    pub room: Option<Room>,
    /// Major abbreviations.
    pub majors: Vec<String>,
    pub work_auths: Vec<String>,
    pub positions: Vec<String>,
}

impl CompanyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn majors<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.majors = abbreviations.into_iter().map(Into::into).collect();
        self
    }

    pub fn work_auths<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.work_auths = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn positions<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positions = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.room.is_none()
            && self.majors.is_empty()
            && self.work_auths.is_empty()
            && self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A ready-to-run statement and the values bound to its `?` placeholders, in
/// order.
pub struct CompanyQuery {
    pub sql: String,
    pub params: Vec<String>,
}

#[derive(Default)]
struct QueryParts {
    joins: Vec<&'static str>,
    predicates: Vec<String>,
    params: Vec<String>,
}

impl QueryParts {
    fn add_dimension(&mut self, dimension: &Dimension, values: &[String]) {
        if values.is_empty() {
            return;
        }

        self.joins.push(dimension.join);
        self.params.push(dimension.sentinel.to_string());
        self.params.extend(values.iter().cloned());

        let placeholders = vec!["?"; values.len() + 1].join(", ");
        self.predicates
            .push(format!("{} IN ({placeholders})", dimension.column));
    }

    fn finish(self) -> CompanyQuery {
        let mut sql = String::from(COMPANY_SELECT);
        for join in self.joins {
            sql.push_str("\n     ");
            sql.push_str(join);
        }
        if !self.predicates.is_empty() {
            sql.push_str("\n     WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        sql.push_str("\n     ");
        sql.push_str(COMPANY_ORDER);

        CompanyQuery {
            sql,
            params: self.params,
        }
    }
}

/// Every company that has a table assignment.
pub fn all_companies_query() -> CompanyQuery {
    QueryParts::default().finish()
}

/// Companies whose name contains `term`. An empty term lists everything.
pub fn search_query(term: &str) -> CompanyQuery {
    let mut parts = QueryParts::default();
    if !term.is_empty() {
        parts
            .predicates
            .push("company.name LIKE ? ESCAPE '\\'".to_string());
        parts.params.push(format!("%{}%", escape_like(term)));
    }
    parts.finish()
}

/// Companies matching every active dimension of `filter`.
pub fn filter_query(filter: &CompanyFilter) -> CompanyQuery {
    if filter.is_empty() {
        return all_companies_query();
    }

    let mut parts = QueryParts::default();

    if let Some(room) = filter.room {
        parts.predicates.push("room.name = ?".to_string());
        parts.params.push(room.as_str().to_string());
    }

    parts.add_dimension(&MAJOR_DIMENSION, &filter.majors);
    parts.add_dimension(&WORK_AUTH_DIMENSION, &filter.work_auths);
    parts.add_dimension(&POSITION_DIMENSION, &filter.positions);

    parts.finish()
}

/// Escape `LIKE` metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Natural display ordering for company names: a leading "The " is dropped,
/// case is folded, and periods and spaces are ignored.
pub fn company_sort_key(name: &str) -> String {
    name.strip_prefix("The ")
        .unwrap_or(name)
        .chars()
        .filter(|c| *c != '.' && *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}
