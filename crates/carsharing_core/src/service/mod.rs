//! Core use-case services.
//!
//! # Responsibility
//! - Convert repository results into outcomes the interactive front end shows.
//! - Log storage failures so they never reach the user as raw detail.

pub mod company_service;
