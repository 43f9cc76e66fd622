//! Wire contracts shared by the RAG console client.
//!
//! Everything here mirrors the backend's JSON shapes; no I/O, no UI.

pub mod documents;
pub mod models;
pub mod query;
