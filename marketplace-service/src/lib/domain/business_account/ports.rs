use async_trait::async_trait;

use crate::business_account::errors::BusinessAccountError;
use crate::business_account::models::BusinessAccount;
use crate::business_account::models::BusinessAccountId;
use crate::business_account::models::CreateBusinessAccountCommand;
use crate::user::models::UserId;

/// Port for business account domain service operations.
#[async_trait]
pub trait BusinessAccountServicePort: Send + Sync + 'static {
    /// Create a business account owned by the authenticated user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(
        &self,
        user_id: &UserId,
        command: CreateBusinessAccountCommand,
    ) -> Result<BusinessAccount, BusinessAccountError>;

    /// Retrieve all business accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self) -> Result<Vec<BusinessAccount>, BusinessAccountError>;
}

/// Persistence operations for business accounts.
#[async_trait]
pub trait BusinessAccountRepository: Send + Sync + 'static {
    /// Persist a new business account.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed
    async fn create(
        &self,
        account: BusinessAccount,
    ) -> Result<BusinessAccount, BusinessAccountError>;

    /// Retrieve a business account by id, scoped to its owner (None if the
    /// account does not exist or belongs to another user).
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id_and_user_id(
        &self,
        id: &BusinessAccountId,
        user_id: &UserId,
    ) -> Result<Option<BusinessAccount>, BusinessAccountError>;

    /// Retrieve all business accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_all(&self) -> Result<Vec<BusinessAccount>, BusinessAccountError>;
}
