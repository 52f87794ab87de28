//! Core types and trait definitions for the Roster demo API.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod address;
pub mod error;
pub mod food;
pub mod health;
pub mod patch;
pub mod person;
pub mod pet;
pub mod provider;
pub mod store;
pub mod validate;

mod filter;

pub use error::{Error, Result};
