use std::sync::Arc;

use async_trait::async_trait;
use auth::IssuedTokens;
use auth::TokenIssuer;

use crate::token::errors::TokenPairError;
use crate::token::models::TokenPair;
use crate::token::ports::TokenPairRepository;
use crate::token::ports::TokenServicePort;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service for token issuance and refresh.
///
/// Every pair it mints references an existing user; the pair is persisted
/// for audit before the tokens are handed out.
pub struct TokenService<TR, UR>
where
    TR: TokenPairRepository,
    UR: UserRepository,
{
    repository: Arc<TR>,
    user_repository: Arc<UR>,
    issuer: Arc<TokenIssuer>,
}

impl<TR, UR> TokenService<TR, UR>
where
    TR: TokenPairRepository,
    UR: UserRepository,
{
    pub fn new(repository: Arc<TR>, user_repository: Arc<UR>, issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            user_repository,
            issuer,
        }
    }

    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), TokenPairError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| TokenPairError::DatabaseError(e.to_string()))?;

        if user.is_none() {
            return Err(TokenPairError::UserNotFound(user_id.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl<TR, UR> TokenServicePort for TokenService<TR, UR>
where
    TR: TokenPairRepository,
    UR: UserRepository,
{
    async fn issue(&self, user_id: &UserId) -> Result<IssuedTokens, TokenPairError> {
        self.ensure_user_exists(user_id).await?;

        let tokens = self.issuer.create_token_pair(&user_id.to_string())?;

        let pair = TokenPair::new(
            *user_id,
            tokens.access_token.clone(),
            tokens.refresh_token.clone(),
        );
        self.repository.save(pair).await?;

        tracing::info!(user_id = %user_id, "Token pair issued");

        Ok(tokens)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, TokenPairError> {
        let subject = self.issuer.parse_refresh_token(refresh_token)?;
        let user_id = UserId::from_string(&subject)?;

        self.ensure_user_exists(&user_id).await?;

        let access_token = self.issuer.create_access_token(&subject)?;

        self.repository
            .update_access_token(&user_id, refresh_token, &access_token)
            .await?;

        tracing::info!(user_id = %user_id, "Access token refreshed");

        Ok(access_token)
    }

    async fn list(&self) -> Result<Vec<TokenPair>, TokenPairError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::errors::UserError;
    use crate::user::models::EmailAddress;
    use crate::user::models::User;

    mock! {
        pub TestTokenPairRepository {}

        #[async_trait]
        impl TokenPairRepository for TestTokenPairRepository {
            async fn save(&self, pair: TokenPair) -> Result<TokenPair, TokenPairError>;
            async fn update_access_token(
                &self,
                user_id: &UserId,
                refresh_token: &str,
                access_token: &str,
            ) -> Result<(), TokenPairError>;
            async fn list_all(&self) -> Result<Vec<TokenPair>, TokenPairError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn issuer() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(
            b"test-access-key-at-least-32-bytes!!",
            b"test-refresh-key-at-least-32-bytes!",
            Duration::from_secs(900),
            Duration::from_secs(86400),
        ))
    }

    fn test_user(id: UserId) -> User {
        let now = Utc::now();
        User {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            age: 36,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_issue_persists_pair_for_existing_user() {
        let user_id = UserId::new();

        let mut user_repository = MockTestUserRepository::new();
        user_repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |id| Ok(Some(test_user(*id))));

        let mut repository = MockTestTokenPairRepository::new();
        repository
            .expect_save()
            .withf(move |pair| {
                pair.user_id == user_id
                    && !pair.access_token.is_empty()
                    && !pair.refresh_token.is_empty()
            })
            .times(1)
            .returning(Ok);

        let service = TokenService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            issuer(),
        );

        let tokens = service.issue(&user_id).await.unwrap();
        assert_ne!(tokens.access_token, tokens.refresh_token);
    }

    #[tokio::test]
    async fn test_issue_fails_for_unknown_user() {
        let mut user_repository = MockTestUserRepository::new();
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut repository = MockTestTokenPairRepository::new();
        repository.expect_save().times(0);

        let service = TokenService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            issuer(),
        );

        let result = service.issue(&UserId::new()).await;
        assert!(matches!(result, Err(TokenPairError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_refresh_mints_new_access_token_and_updates_store() {
        let user_id = UserId::new();
        let issuer = issuer();
        let refresh_token = issuer.create_refresh_token(&user_id.to_string()).unwrap();

        let mut user_repository = MockTestUserRepository::new();
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |id| Ok(Some(test_user(*id))));

        let expected_refresh = refresh_token.clone();
        let mut repository = MockTestTokenPairRepository::new();
        repository
            .expect_update_access_token()
            .withf(move |id, refresh, access| {
                *id == user_id && refresh == expected_refresh && !access.is_empty()
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TokenService::new(Arc::new(repository), Arc::new(user_repository), issuer);

        let access_token = service.refresh(&refresh_token).await.unwrap();
        assert!(!access_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token_in_place_of_refresh() {
        let issuer = issuer();
        let access_token = issuer.create_access_token("user123").unwrap();

        let mut user_repository = MockTestUserRepository::new();
        user_repository.expect_find_by_id().times(0);

        let mut repository = MockTestTokenPairRepository::new();
        repository.expect_update_access_token().times(0);

        let service = TokenService::new(Arc::new(repository), Arc::new(user_repository), issuer);

        let result = service.refresh(&access_token).await;
        assert!(matches!(result, Err(TokenPairError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_refresh_fails_when_user_is_gone() {
        let user_id = UserId::new();
        let issuer = issuer();
        let refresh_token = issuer.create_refresh_token(&user_id.to_string()).unwrap();

        let mut user_repository = MockTestUserRepository::new();
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut repository = MockTestTokenPairRepository::new();
        repository.expect_update_access_token().times(0);

        let service = TokenService::new(Arc::new(repository), Arc::new(user_repository), issuer);

        let result = service.refresh(&refresh_token).await;
        assert!(matches!(result, Err(TokenPairError::UserNotFound(_))));
    }
}
