//! Nutrition Tracker Backend Library
//!
//! User registration, login and nutrition history over HTTP/JSON.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: registration, login, history submit/list
//! - Repositories: credential and history stores (Postgres or in-memory)
//! - Database: PostgreSQL with SQLx

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
