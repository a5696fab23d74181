use crate::modules::accounts::core::account::Account;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("login does not satisfy the registration rules")]
    InvalidLogin,

    #[error("email does not satisfy the registration rules")]
    InvalidEmail,

    #[error("password does not satisfy the registration rules")]
    InvalidPassword,

    #[error("login already in use")]
    LoginTaken,

    #[error("email already in use")]
    EmailTaken,
}

pub enum Decision {
    Accepted { account: Account },
    Rejected { reason: DecideError },
}
