//! Auth types for the bolão API.
//!
//! Provides JWT issue/validation and the bearer-token `Identity` extractor.

pub mod identity;
pub mod token;
