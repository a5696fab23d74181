use std::sync::Arc;

use thiserror::Error;

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;
use crate::modules::accounts::use_cases::register_account::decide::decide_register;
use crate::modules::accounts::use_cases::register_account::decision::{DecideError, Decision};
use crate::shared::infrastructure::account_store::{AccountStore, StoreError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("registration rejected: {0}")]
    Domain(DecideError),
}

pub struct RegisterAccountHandler<TStore>
where
    TStore: AccountStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterAccountHandler<TStore>
where
    TStore: AccountStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterAccount) -> Result<Account, ApplicationError> {
        let occupancy = self
            .store
            .occupancy(&command.login, &command.email)
            .await
            .map_err(ApplicationError::Store)?;

        match decide_register(&occupancy, command) {
            Decision::Accepted { account } => {
                self.store.insert(account.clone()).await?;
                tracing::debug!(login = %account.login, "account registered");
                Ok(account)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
