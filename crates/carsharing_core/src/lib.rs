//! Core domain logic for the car-sharing manager.
//! Owns the company record, its SQLite store and the storage boundary the
//! interactive front end talks to.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{init_logging, logging_status, LogSink};
pub use model::company::{Company, CompanyId};
pub use repo::company_repo::{CompanyRepository, RepoError, RepoResult, SqliteCompanyRepository};
pub use service::company_service::CompanyService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
