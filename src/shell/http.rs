use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::accounts::use_cases::register_account::inbound::http as register_http;
use crate::shared::core::selectors::{REGISTER_API_PATH, REGISTER_ROUTE};
use crate::shell::pages;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route(REGISTER_ROUTE, get(pages::register))
        .route(REGISTER_API_PATH, post(register_http::handle))
        .with_state(state)
}
