//! Authentication module
//!
//! Provides bcrypt password hashing. Logins issue no token or session.

mod password;

pub use password::PasswordService;
