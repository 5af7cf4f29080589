//! Shared fixture: an in-memory career fair database with a small, fully known
//! population.
//!
//! | company         | table | room         | majors  | work auths               | positions            |
//! |-----------------|-------|--------------|---------|--------------------------|----------------------|
//! | The Acme Co.    | W1    | Wood         | CS, EE  | Citizen                  | Full-time, Internship|
//! | Bolt Inc        | M1    | Multipurpose | ME      | (blank)                  | Co-op                |
//! | acme Tools      | W2    | Wood         | ALL     | Citizen, Visa Sponsorship| (blank)              |
//! | Delta Dynamics  | M3    | Multipurpose | EE      | Permanent Resident       | Full-time            |
//! | Echo Labs       | W3    | Wood         | -       | -                        | -                    |
//! | O'Reilly Media  | M2    | Multipurpose | CS      | Citizen                  | Internship           |
//! | Ghost Corp      | -     | -            | -       | -                        | -                    |
#![allow(dead_code)]

use anyhow::Result;
use career_fair_directory::{install_schema, Company, Directory};
use rusqlite::Connection;

pub const SORTED_WITH_TABLES: [&str; 6] = [
    "The Acme Co.",
    "acme Tools",
    "Bolt Inc",
    "Delta Dynamics",
    "Echo Labs",
    "O'Reilly Media",
];

pub fn seeded_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    install_schema(&conn)?;
    conn.execute_batch(
        "INSERT INTO room (_id, name) VALUES (1, 'Wood'), (2, 'Multipurpose'), (3, 'Hall');

        INSERT INTO major (_id, name, abbreviation) VALUES
            (1, 'Computer Science', 'CS'),
            (2, 'Electrical Engineering', 'EE'),
            (3, 'Mechanical Engineering', 'ME'),
            (4, 'All Majors', 'ALL');

        INSERT INTO workAuth (_id, type) VALUES
            (1, ''), (2, 'Citizen'), (3, 'Permanent Resident'), (4, 'Visa Sponsorship');

        INSERT INTO employmentType (_id, type) VALUES
            (1, ''), (2, 'Full-time'), (3, 'Internship'), (4, 'Co-op');

        INSERT INTO company (_id, name, website) VALUES
            (1, 'The Acme Co.', 'https://acme.example'),
            (2, 'Bolt Inc', 'https://bolt.example'),
            (3, 'acme Tools', 'https://acmetools.example'),
            (4, 'Delta Dynamics', 'https://delta.example'),
            (5, 'Echo Labs', 'https://echo.example'),
            (6, 'O''Reilly Media', 'https://oreilly.example'),
            (7, 'Ghost Corp', 'https://ghost.example');

        INSERT INTO location (_id, tableNum, roomID) VALUES
            (1, 'W1', 1), (2, 'M1', 2), (3, 'W2', 1), (4, 'M3', 2), (5, 'W3', 1), (6, 'M2', 2);

        INSERT INTO companyToLocation (companyID, locationID) VALUES
            (1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6);

        INSERT INTO companyToMajor (companyID, majorID) VALUES
            (1, 1), (1, 2), (2, 3), (3, 4), (4, 2), (6, 1);

        INSERT INTO companyToWorkAuth (companyID, workAuthID) VALUES
            (1, 2), (2, 1), (3, 2), (3, 4), (4, 3), (6, 2);

        INSERT INTO companyToType (companyID, typeID) VALUES
            (1, 3), (1, 2), (2, 4), (3, 1), (4, 2), (6, 3);",
    )?;
    Ok(conn)
}

pub fn seeded_directory() -> Result<Directory> {
    Directory::from_connection(seeded_connection()?)
}

pub fn names(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}
