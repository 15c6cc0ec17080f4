//! core
//!
//! Core domain types for store-tasks.
//!
//! # Modules
//!
//! - [`config`] - Settings schema and loading

pub mod config;
