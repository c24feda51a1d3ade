//! # lexideck
//!
//! Idiom and vocabulary flashcard API.
//!
//! Idioms come from a built-in catalog. Words are looked up in the Free
//! Dictionary API, cached in an LRU, and replaced by built-in words when
//! the dictionary cannot deliver.
//!
//! ## Modules
//!
//! - [`api`] - axum HTTP API
//! - [`orchestrator`] - word and idiom services with fallback
//! - [`dictionary`] - external dictionary client and cached lookups
//! - [`cache`] - LRU word cache
//! - [`store`] - built-in idioms, fallback words and candidate lists
//! - [`cli`] - command-line interface
//! - [`types`] - shared types

pub mod api;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dictionary;
pub mod orchestrator;
pub mod store;
pub mod types;

pub use types::config::Config;
pub use types::errors::{LexiError, LexiResult};
