//! Shared types.

pub mod config;
pub mod entry;
pub mod errors;
pub mod requests;
pub mod responses;
