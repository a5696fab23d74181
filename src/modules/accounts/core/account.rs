use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub registered_at: i64,
}

/// What the store already holds for a login/email pair, the input to the
/// registration decide step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub login_taken: bool,
    pub email_taken: bool,
}
