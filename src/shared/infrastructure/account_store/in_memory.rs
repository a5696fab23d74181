use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::accounts::core::account::{Account, Occupancy};
use crate::shared::infrastructure::account_store::{AccountStore, StoreError};

#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
    seen_logins: Mutex<HashSet<String>>,
    seen_emails: Mutex<HashSet<String>>,
    offline: bool,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("account store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccounts {
    async fn occupancy(&self, login: &str, email: &str) -> Result<Occupancy, StoreError> {
        self.ensure_online()?;
        let login_taken = self.seen_logins.lock().await.contains(login);
        let email_taken = self.seen_emails.lock().await.contains(email);
        Ok(Occupancy {
            login_taken,
            email_taken,
        })
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        self.ensure_online()?;
        {
            let mut logins = self.seen_logins.lock().await;
            if !logins.insert(account.login.clone()) {
                return Err(StoreError::Duplicate {
                    login: account.login,
                });
            }
        }
        self.seen_emails.lock().await.insert(account.email.clone());
        self.rows.lock().await.push(account);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.lock().await.clone())
    }
}
