use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Utc;
use marketplace_service::business_account::errors::BusinessAccountError;
use marketplace_service::business_account::models::BusinessAccount;
use marketplace_service::business_account::models::BusinessAccountId;
use marketplace_service::business_account::ports::BusinessAccountRepository;
use marketplace_service::business_account::service::BusinessAccountService;
use marketplace_service::inbound::http::router::create_router;
use marketplace_service::inbound::http::router::AppState;
use marketplace_service::job::errors::JobError;
use marketplace_service::job::models::Job;
use marketplace_service::job::models::JobId;
use marketplace_service::job::ports::JobRepository;
use marketplace_service::job::service::JobService;
use marketplace_service::job_application::errors::JobApplicationError;
use marketplace_service::job_application::models::JobApplication;
use marketplace_service::job_application::ports::JobApplicationRepository;
use marketplace_service::job_application::service::JobApplicationService;
use marketplace_service::token::errors::TokenPairError;
use marketplace_service::token::models::TokenPair;
use marketplace_service::token::ports::TokenPairRepository;
use marketplace_service::token::service::TokenService;
use marketplace_service::user::errors::UserError;
use marketplace_service::user::models::User;
use marketplace_service::user::models::UserId;
use marketplace_service::user::ports::UserRepository;
use marketplace_service::user::service::UserService;
use serde_json::Value;
use tower::ServiceExt;

/// Full application wired against in-memory stores, exercised through the
/// router without a listening socket.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn spawn() -> Self {
        let issuer = Arc::new(TokenIssuer::new(
            b"test-access-secret-32-bytes-long!!!",
            b"test-refresh-secret-32-bytes-long!!",
            Duration::from_secs(15 * 60),
            Duration::from_secs(24 * 60 * 60),
        ));

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let token_repository = Arc::new(InMemoryTokenPairRepository::default());
        let account_repository = Arc::new(InMemoryBusinessAccountRepository::default());
        let job_repository = Arc::new(InMemoryJobRepository::default());
        let application_repository = Arc::new(InMemoryJobApplicationRepository::default());

        let token_service = Arc::new(TokenService::new(
            token_repository,
            Arc::clone(&user_repository),
            Arc::clone(&issuer),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&token_service),
        ));
        let business_account_service =
            Arc::new(BusinessAccountService::new(Arc::clone(&account_repository)));
        let job_service = Arc::new(JobService::new(
            Arc::clone(&job_repository),
            account_repository,
        ));
        let job_application_service = Arc::new(JobApplicationService::new(
            application_repository,
            job_repository,
            user_repository,
        ));

        let state = AppState {
            user_service,
            token_service,
            business_account_service,
            job_service,
            job_application_service,
            token_issuer: issuer,
        };

        Self {
            router: create_router(state),
        }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn post_with_headers(
        &self,
        uri: &str,
        body: Value,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.get_with_headers(uri, &[]).await
    }

    pub async fn get_with_headers(
        &self,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse response body")
        };

        (status, body)
    }

    /// Register a user and return (access token, refresh token).
    pub async fn sign_up(&self, email: &str) -> (String, String) {
        let (status, body) = self
            .post(
                "/api/v1/users",
                serde_json::json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": email,
                    "password": "pass_word!",
                    "age": 36
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "sign-up failed: {body}");

        (
            body["response"]["accessToken"]
                .as_str()
                .expect("Missing access token")
                .to_string(),
            body["response"]["refreshToken"]
                .as_str()
                .expect("Missing refresh token")
                .to_string(),
        )
    }

    /// Register a user, then open a business account owned by them.
    /// Returns (access token, business account id).
    pub async fn sign_up_with_account(&self, email: &str) -> (String, String) {
        let (access, _) = self.sign_up(email).await;

        let (status, body) = self
            .post_with_headers(
                "/api/v1/business-accounts",
                serde_json::json!({
                    "name": "Acme",
                    "description": "A shop"
                }),
                &[("Authorization", &format!("Bearer {access}"))],
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "account failed: {body}");

        let account_id = body["id"].as_str().expect("Missing account id").to_string();
        (access, account_id)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryTokenPairRepository {
    pairs: Mutex<Vec<TokenPair>>,
}

#[async_trait]
impl TokenPairRepository for InMemoryTokenPairRepository {
    async fn save(&self, pair: TokenPair) -> Result<TokenPair, TokenPairError> {
        self.pairs.lock().unwrap().push(pair.clone());
        Ok(pair)
    }

    async fn update_access_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
        access_token: &str,
    ) -> Result<(), TokenPairError> {
        let mut pairs = self.pairs.lock().unwrap();
        if let Some(pair) = pairs
            .iter_mut()
            .find(|p| p.user_id == *user_id && p.refresh_token == refresh_token)
        {
            pair.access_token = access_token.to_string();
            pair.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TokenPair>, TokenPairError> {
        Ok(self.pairs.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryBusinessAccountRepository {
    accounts: Mutex<Vec<BusinessAccount>>,
}

#[async_trait]
impl BusinessAccountRepository for InMemoryBusinessAccountRepository {
    async fn create(
        &self,
        account: BusinessAccount,
    ) -> Result<BusinessAccount, BusinessAccountError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn find_by_id_and_user_id(
        &self,
        id: &BusinessAccountId,
        user_id: &UserId,
    ) -> Result<Option<BusinessAccount>, BusinessAccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == *id && a.user_id == *user_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<BusinessAccount>, BusinessAccountError> {
        Ok(self.accounts.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: Job) -> Result<Job, JobError> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_by_id_and_business_account_id(
        &self,
        id: &JobId,
        business_account_id: &BusinessAccountId,
    ) -> Result<Option<Job>, JobError> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == *id && j.business_account_id == *business_account_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Job>, JobError> {
        Ok(self.jobs.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryJobApplicationRepository {
    applications: Mutex<Vec<JobApplication>>,
}

#[async_trait]
impl JobApplicationRepository for InMemoryJobApplicationRepository {
    async fn create(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, JobApplicationError> {
        self.applications.lock().unwrap().push(application.clone());
        Ok(application)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>, JobApplicationError> {
        Ok(self.applications.lock().unwrap().clone())
    }
}
