//! The RAG console: corpus management plus chat querying against one
//! backend service.
//!
//! Split the way the data flows: `api` wraps the HTTP calls, `state` holds
//! the screen snapshot and its pure reducer, `controller` sequences the
//! workflows, `ui` renders snapshots and forwards user intents back in.

pub mod api;
pub mod controller;
pub mod error;
pub mod files;
pub mod state;
pub mod ui;
