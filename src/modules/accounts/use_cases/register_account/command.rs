use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RegisterAccount {
    pub account_id: Uuid,
    pub login: String,
    pub email: String,
    pub password: String,
    pub registered_at: i64,
}
