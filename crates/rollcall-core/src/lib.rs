//! Core types and trait definitions for the Rollcall attendance store.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it.

pub mod activity;
pub mod attendance;
pub mod clock;
pub mod error;
pub mod event;
pub mod stats;
pub mod store;
pub mod student;

pub use error::{Error, Result};
