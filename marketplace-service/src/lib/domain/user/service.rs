use std::sync::Arc;

use async_trait::async_trait;
use auth::IssuedTokens;
use auth::PasswordHasher;
use chrono::Utc;

use crate::token::ports::TokenServicePort;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::SignInCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Sign-up and sign-in both end with a freshly issued token pair, so the
/// client can start calling protected routes immediately.
pub struct UserService<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    repository: Arc<UR>,
    token_service: Arc<TS>,
    password_hasher: PasswordHasher,
}

impl<UR, TS> UserService<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    pub fn new(repository: Arc<UR>, token_service: Arc<TS>) -> Self {
        Self {
            repository,
            token_service,
            password_hasher: PasswordHasher::new(),
        }
    }

    async fn issue_tokens(&self, user_id: &UserId) -> Result<IssuedTokens, UserError> {
        self.token_service
            .issue(user_id)
            .await
            .map_err(|e| UserError::TokenIssuance(e.to_string()))
    }
}

#[async_trait]
impl<UR, TS> UserServicePort for UserService<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<(User, IssuedTokens), UserError> {
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            age: command.age,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        let tokens = self.issue_tokens(&created_user.id).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok((created_user, tokens))
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<(User, IssuedTokens), UserError> {
        let user = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        let tokens = self.issue_tokens(&user.id).await?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok((user, tokens))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
