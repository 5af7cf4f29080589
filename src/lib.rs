//! Read-only data access for the career fair directory app. The UI layer
//! opens a [`Directory`] once per session and asks it for company listings,
//! filtered and searched views, and the global lists behind the filter pickers.
pub mod cache;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod models;

pub use config::DirectoryConfig;
pub use db::{company_sort_key, install_schema, CompanyFilter};
pub use directory::{index_companies, index_majors, Directory};
pub use error::DirectoryError;

/// The domain types handed to the UI.
pub use models::{Company, CompanyKey, Major, MajorKey, MajorOrder, Room};
