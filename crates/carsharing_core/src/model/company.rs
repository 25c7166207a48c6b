//! Company record.
//!
//! # Responsibility
//! - Carry one persisted company row between the store and the front end.
//!
//! # Invariants
//! - `id` is assigned by the store, positive and never reused.
//! - Fields are fixed at construction; companies are never updated.

use serde::{Deserialize, Serialize};

/// Store-assigned company identifier.
pub type CompanyId = i64;

/// One car-sharing company as persisted in the `COMPANY` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
