//! API request and response types
//!
//! Field names on the wire are camelCase. Password fields are wrapped in
//! [`SecretString`] so they never show up in `Debug` output, and the request
//! types that carry them are deserialize-only.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: SecretString,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// Plain `{ "message": ... }` body used by most endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login response
///
/// No token is issued; the echoed email is the only artifact of a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A nutrition history entry as submitted by a client
///
/// Only `userEmail` is required. It is a plain tag and is not checked
/// against registered users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_intake: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_intake: Option<f64>,
}

impl HistoryEntry {
    /// Entry for `user_email` with every optional field unset
    pub fn for_user(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            name: None,
            age: None,
            weight: None,
            height: None,
            activity_level: None,
            calories: None,
            water_intake: None,
            protein_intake: None,
            fiber_intake: None,
        }
    }
}

/// A stored history record as returned by `GET /api/history/:email`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordResponse {
    pub id: String,
    #[serde(flatten)]
    pub entry: HistoryEntry,
    pub created_at: DateTime<Utc>,
}
