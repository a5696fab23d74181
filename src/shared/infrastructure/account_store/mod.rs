use async_trait::async_trait;
use thiserror::Error;

use crate::modules::accounts::core::account::{Account, Occupancy};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account already stored for login {login}")]
    Duplicate { login: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn occupancy(&self, login: &str, email: &str) -> Result<Occupancy, StoreError>;
    async fn insert(&self, account: Account) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<Account>, StoreError>;
}

pub mod in_memory;
