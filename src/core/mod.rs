//! In-memory authoritative show collection.

/// Ordered show store and its mutation operations.
pub mod store;
