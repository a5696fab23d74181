use crate::modules::accounts::core::account::{Account, Occupancy};
use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;
use crate::modules::accounts::use_cases::register_account::decision::{DecideError, Decision};
use crate::shared::core::validation::{email_is_valid, login_is_valid, password_is_valid};

pub fn decide_register(occupancy: &Occupancy, command: RegisterAccount) -> Decision {
    if !login_is_valid(&command.login) {
        return Decision::Rejected {
            reason: DecideError::InvalidLogin,
        };
    }
    if !email_is_valid(&command.email) {
        return Decision::Rejected {
            reason: DecideError::InvalidEmail,
        };
    }
    if !password_is_valid(&command.password) {
        return Decision::Rejected {
            reason: DecideError::InvalidPassword,
        };
    }
    if occupancy.login_taken {
        return Decision::Rejected {
            reason: DecideError::LoginTaken,
        };
    }
    if occupancy.email_taken {
        return Decision::Rejected {
            reason: DecideError::EmailTaken,
        };
    }

    Decision::Accepted {
        account: Account {
            id: command.account_id,
            login: command.login,
            email: command.email,
            registered_at: command.registered_at,
        },
    }
}
