//! User service for registration and login
//!
//! Password hashing and verification run on the blocking thread pool.

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{NewUser, UserRepository};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// The existence check and the insert are separate store calls. A
    /// concurrent registration that slips between them is stopped by the
    /// store's uniqueness constraint and surfaces as a storage error.
    pub async fn register(
        users: &dyn UserRepository,
        passwords: &PasswordService,
        name: Option<String>,
        email: &str,
        password: &SecretString,
    ) -> Result<(), ApiError> {
        if users.find_by_email(email).await?.is_some() {
            warn!(email = %email, "Registration rejected: email already in use");
            return Err(ApiError::EmailInUse);
        }

        let password_hash = passwords
            .hash_async(password.expose_secret().clone())
            .await?;

        users
            .create(NewUser {
                name,
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(email = %email, "User registered");
        Ok(())
    }

    /// Login with email and password, returning the email on success
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(
        users: &dyn UserRepository,
        email: &str,
        password: &SecretString,
    ) -> Result<String, ApiError> {
        let Some(user) = users.find_by_email(email).await? else {
            warn!(email = %email, "Login failed");
            return Err(ApiError::InvalidCredentials);
        };

        let valid =
            PasswordService::verify_async(password.expose_secret().clone(), user.password_hash)
                .await?;

        if !valid {
            warn!(email = %email, "Login failed");
            return Err(ApiError::InvalidCredentials);
        }

        info!(email = %email, "Login successful");
        Ok(user.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryUserRepository, StoreError, UserRecord};
    use async_trait::async_trait;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn passwords() -> PasswordService {
        PasswordService::new(4)
    }

    async fn register(
        users: &dyn UserRepository,
        name: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        UserService::register(users, &passwords(), name.map(String::from), email, &secret(password))
            .await
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let users = InMemoryUserRepository::new();
        register(&users, Some("Ann"), "ann@x.com", "pw123").await.unwrap();

        let stored = users.find_by_email("ann@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw123");
        assert!(PasswordService::verify("pw123", &stored.password_hash).unwrap());
        assert_eq!(stored.name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let users = InMemoryUserRepository::new();
        register(&users, None, "ann@x.com", "pw123").await.unwrap();

        let result = register(&users, Some("Other"), "ann@x.com", "different").await;
        assert!(matches!(result, Err(ApiError::EmailInUse)));
        assert_eq!(users.count().await, 1);
    }

    #[tokio::test]
    async fn test_login_success_returns_email() {
        let users = InMemoryUserRepository::new();
        register(&users, None, "ann@x.com", "pw123").await.unwrap();

        let email = UserService::login(&users, "ann@x.com", &secret("pw123")).await.unwrap();
        assert_eq!(email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_register_then_login_generated_users() {
        let users = InMemoryUserRepository::new();

        for _ in 0..3 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let password: String = (8..16).fake();
            if users.find_by_email(&email).await.unwrap().is_some() {
                continue;
            }

            UserService::register(&users, &passwords(), Some(name), &email, &secret(&password))
                .await
                .unwrap();
            let logged_in = UserService::login(&users, &email, &secret(&password)).await.unwrap();
            assert_eq!(logged_in, email);
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_match() {
        let users = InMemoryUserRepository::new();
        register(&users, None, "ann@x.com", "pw123").await.unwrap();

        let wrong = UserService::login(&users, "ann@x.com", &secret("wrong")).await.unwrap_err();
        let unknown = UserService::login(&users, "bob@x.com", &secret("pw123")).await.unwrap_err();

        assert!(matches!(wrong, ApiError::InvalidCredentials));
        assert!(matches!(unknown, ApiError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    /// Store whose lookup never sees existing users, as if every
    /// registration raced another one past the existence check
    struct RacingUserRepository(InMemoryUserRepository);

    #[async_trait]
    impl UserRepository for RacingUserRepository {
        async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
            Ok(None)
        }

        async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
            self.0.create(user).await
        }
    }

    #[tokio::test]
    async fn test_lost_registration_race_is_storage_error() {
        let users = RacingUserRepository(InMemoryUserRepository::new());
        register(&users, None, "ann@x.com", "pw123").await.unwrap();

        let result = register(&users, None, "ann@x.com", "pw123").await;
        assert!(matches!(result, Err(ApiError::Storage(StoreError::Duplicate(_)))));
    }

    #[tokio::test]
    async fn test_invalid_cost_is_internal_error() {
        let users = InMemoryUserRepository::new();
        let result = UserService::register(
            &users,
            &PasswordService::new(99),
            None,
            "ann@x.com",
            &secret("pw"),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
        assert_eq!(users.count().await, 0);
    }
}
