//! Core abstractions shared by model gateway implementations

pub mod error;
pub mod provider;
pub mod types;
