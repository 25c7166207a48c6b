//! Company use-case service.
//!
//! # Responsibility
//! - Provide the list/create entry points used by the manager menu.
//! - Swallow and log storage failures at the boundary.
//!
//! # Invariants
//! - Service APIs never propagate storage errors to their callers.
//! - A failed create is indistinguishable from a duplicate name to callers.

use crate::model::company::Company;
use crate::repo::company_repo::CompanyRepository;
use log::{debug, error};

/// Use-case service wrapper for company storage.
pub struct CompanyService<R: CompanyRepository> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all companies in ascending id order.
    ///
    /// Storage failures are logged and reported as an empty list.
    pub fn list_companies(&self) -> Vec<Company> {
        match self.repo.list_companies() {
            Ok(companies) => {
                debug!(
                    "event=company_list module=service status=ok count={}",
                    companies.len()
                );
                companies
            }
            Err(err) => {
                error!("event=company_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Creates one company, returning whether it was persisted.
    pub fn create_company(&self, name: &str) -> bool {
        match self.repo.insert_company(name) {
            Ok(company) => {
                debug!(
                    "event=company_create module=service status=ok id={}",
                    company.id()
                );
                true
            }
            Err(err) => {
                error!("event=company_create module=service status=error error={err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompanyService;
    use crate::model::company::Company;
    use crate::repo::company_repo::{CompanyRepository, RepoError, RepoResult};

    struct FailingRepo;

    impl CompanyRepository for FailingRepo {
        fn list_companies(&self) -> RepoResult<Vec<Company>> {
            Err(RepoError::InvalidData("broken row".to_string()))
        }

        fn insert_company(&self, _name: &str) -> RepoResult<Company> {
            Err(RepoError::UnexpectedRowCount(0))
        }
    }

    #[test]
    fn list_failure_is_reported_as_empty() {
        let service = CompanyService::new(FailingRepo);
        assert!(service.list_companies().is_empty());
    }

    #[test]
    fn create_failure_is_reported_as_false() {
        let service = CompanyService::new(FailingRepo);
        assert!(!service.create_company("Hertz"));
    }
}
