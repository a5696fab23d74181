use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;
use crate::modules::accounts::use_cases::register_account::decision::DecideError;
use crate::modules::accounts::use_cases::register_account::handler::ApplicationError;
use crate::shared::infrastructure::account_store::StoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterAccountBody {
    pub login: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterAccountResponse {
    pub account_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterAccountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterAccount {
        account_id: Uuid::now_v7(),
        login: body.login,
        email: body.email,
        password: body.password,
        registered_at: Utc::now().timestamp_millis(),
    };

    match state.register_handler.handle(command).await {
        Ok(account) => (
            StatusCode::CREATED,
            Json(RegisterAccountResponse {
                account_id: account.id.to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(DecideError::LoginTaken | DecideError::EmailTaken)) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(ApplicationError::Domain(_)) => StatusCode::BAD_REQUEST.into_response(),
        Err(ApplicationError::Store(StoreError::Duplicate { .. })) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
