use std::sync::Arc;

use crate::modules::accounts::use_cases::register_account::handler::RegisterAccountHandler;
use crate::shared::infrastructure::account_store::in_memory::InMemoryAccounts;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterAccountHandler<InMemoryAccounts>>,
    pub accounts: Arc<InMemoryAccounts>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let accounts = Arc::new(InMemoryAccounts::new());
        let register_handler = Arc::new(RegisterAccountHandler::new(accounts.clone()));
        Self {
            register_handler,
            accounts,
        }
    }
}
