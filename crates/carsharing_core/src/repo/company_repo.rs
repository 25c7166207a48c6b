//! Company repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/insert APIs over the `COMPANY` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Lists are ordered by ascending `ID`.
//! - An insert succeeds only when exactly one row was written.
//! - Read paths reject rows that violate record invariants instead of masking them.

use crate::db::DbError;
use crate::model::company::{Company, CompanyId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COMPANY_LIST_SQL: &str = "SELECT ID, NAME FROM COMPANY ORDER BY ID ASC;";
const COMPANY_INSERT_SQL: &str = "INSERT INTO COMPANY (NAME) VALUES (?1);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for company persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Insert statement reported a changed-row count other than one.
    UnexpectedRowCount(usize),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UnexpectedRowCount(count) => {
                write!(f, "insert affected {count} rows, expected exactly 1")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted company data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UnexpectedRowCount(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for company storage.
pub trait CompanyRepository {
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    fn insert_company(&self, name: &str) -> RepoResult<Company>;
}

/// SQLite-backed company repository over a borrowed connection.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self.conn.prepare(COMPANY_LIST_SQL)?;
        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();

        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }

        Ok(companies)
    }

    fn insert_company(&self, name: &str) -> RepoResult<Company> {
        let mut stmt = self.conn.prepare(COMPANY_INSERT_SQL)?;
        let changed = stmt.execute(params![name])?;
        if changed != 1 {
            return Err(RepoError::UnexpectedRowCount(changed));
        }

        Ok(Company::new(self.conn.last_insert_rowid(), name))
    }
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    let id: CompanyId = row.get("ID")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive id `{id}` in COMPANY.ID"
        )));
    }

    let name: String = row.get("NAME")?;
    Ok(Company::new(id, name))
}
