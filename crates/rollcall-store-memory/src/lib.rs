//! In-memory backend for the Rollcall attendance store.
//!
//! All state lives behind a single [`tokio::sync::RwLock`]; nothing is
//! written to disk.

mod seed;
mod store;

pub use seed::Seed;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
