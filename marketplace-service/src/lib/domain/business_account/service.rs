use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::business_account::errors::BusinessAccountError;
use crate::business_account::models::BusinessAccount;
use crate::business_account::models::BusinessAccountId;
use crate::business_account::models::CreateBusinessAccountCommand;
use crate::business_account::ports::BusinessAccountRepository;
use crate::business_account::ports::BusinessAccountServicePort;
use crate::user::models::UserId;

/// Domain service implementation for business account operations.
pub struct BusinessAccountService<BR>
where
    BR: BusinessAccountRepository,
{
    repository: Arc<BR>,
}

impl<BR> BusinessAccountService<BR>
where
    BR: BusinessAccountRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BusinessAccountServicePort for BusinessAccountService<BR>
where
    BR: BusinessAccountRepository,
{
    async fn create(
        &self,
        user_id: &UserId,
        command: CreateBusinessAccountCommand,
    ) -> Result<BusinessAccount, BusinessAccountError> {
        let now = Utc::now();
        let account = BusinessAccount {
            id: BusinessAccountId::new(),
            user_id: *user_id,
            name: command.name,
            description: command.description,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(account).await?;

        tracing::info!(
            business_account_id = %created.id,
            user_id = %user_id,
            "Business account created"
        );

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<BusinessAccount>, BusinessAccountError> {
        self.repository.list_all().await
    }
}
