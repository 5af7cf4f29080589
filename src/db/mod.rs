//! SQLite access for the directory: opening and checking the bundled file,
//! assembling the listing queries, and reading rows into domain records.

mod catalog;
mod companies;
mod connection;
mod lookup;
pub mod query;
mod schema;

pub use catalog::{
    fetch_all_majors, fetch_major_abbreviations, fetch_major_names, fetch_positions,
    fetch_work_auths,
};
pub use companies::{fetch_company_names, fetch_company_rows, CompanyRow};
pub use connection::{open_database, prepare_connection, verify_schema, REQUIRED_TABLES};
pub use lookup::LookupMaps;
pub use query::{company_sort_key, CompanyFilter, CompanyQuery};
pub use schema::install_schema;
