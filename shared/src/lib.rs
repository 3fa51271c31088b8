//! Nutrition Tracker Shared Library
//!
//! Request and response types for the Nutrition Tracker HTTP API, shared
//! between the backend and any Rust client.

pub mod types;

pub use types::*;
