use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// A well-formed Argon2id hash that matches no password. Verifying against
/// it keeps the unknown-email rejection as slow as a wrong-password one.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$gZiV3M1gPc22ElAH1Jh1Hw$CWOrkoo7oJBQ1iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::HashingFailed(e.to_string()))?;

        let user = User {
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(email = %created_user.email, "User registered");

        Ok(created_user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        match self.repository.find_by_email(email).await? {
            Some(user) => {
                if self.password_hasher.verify(password, &user.password_hash) {
                    Ok(user)
                } else {
                    Err(UserError::InvalidCredentials)
                }
            }
            None => {
                // Burn the same verification cost as the mismatch path
                let _ = self.password_hasher.verify(password, DUMMY_HASH);
                Err(UserError::InvalidCredentials)
            }
        }
    }

    async fn resolve_subject(&self, subject: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(subject)
            .await?
            .ok_or_else(|| UserError::NotFound(subject.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn stored_user(password: &str) -> User {
        let hasher = auth::PasswordHasher::new();
        User {
            name: "Test User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "password123"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: "Test User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: Password::new("password123".to_string()).unwrap(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.name, "Test User");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: "Test User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: Password::new("password123".to_string()).unwrap(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("password123");
        let returned_user = user.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let authenticated = service
            .authenticate("test@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(authenticated.email.as_str(), "test@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("password123");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.authenticate("test@example.com", "wrong_password").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_same_rejection() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        // Same variant as the wrong-password case: callers cannot tell which
        // half of the credential pair failed
        let result = service.authenticate("ghost@nowhere.com", "password123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_resolve_subject_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("password123");
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let resolved = service.resolve_subject("test@example.com").await.unwrap();
        assert_eq!(resolved.email.as_str(), "test@example.com");
    }

    #[tokio::test]
    async fn test_resolve_subject_vanished_user() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.resolve_subject("gone@example.com").await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("password123");
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(vec![user.clone()]));

        let service = UserService::new(Arc::new(repository));

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
    }
}
