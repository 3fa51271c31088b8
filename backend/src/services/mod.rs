//! Business logic services
//!
//! Services encapsulate business logic and sit between the routes and the
//! repositories.

pub mod history;
pub mod user;

pub use history::HistoryService;
pub use user::UserService;
