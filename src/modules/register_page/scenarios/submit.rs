use std::time::Duration;

use crate::modules::register_page::ports::PageDriver;
use crate::modules::register_page::scenarios::support::ScenarioError;
use crate::shared::core::selectors::{
    EMAIL_REGISTER_SELECTOR, FIRST_PASSWORD_REGISTER_SELECTOR, REGISTER_API_PATH, REGISTER_ROUTE,
    SECOND_PASSWORD_REGISTER_SELECTOR, SUBMIT_REGISTER_SELECTOR, USERNAME_REGISTER_SELECTOR,
};

const EXPECTED_STATUS: u16 = 201;

/// Fill every field with a valid value, submit, and await the intercepted
/// registration call.
pub async fn register_valid_user<D: PageDriver>(
    driver: &D,
    call_timeout: Duration,
) -> Result<(), ScenarioError> {
    let username = "Roberto_Gislason-Langworth";
    let email = "Alphonso.Conroy@gmail.com";

    driver.arm_interception("POST", REGISTER_API_PATH).await?;
    driver.goto(REGISTER_ROUTE).await?;

    driver.type_into(USERNAME_REGISTER_SELECTOR, username).await?;
    driver.type_into(EMAIL_REGISTER_SELECTOR, email).await?;
    driver.type_into(FIRST_PASSWORD_REGISTER_SELECTOR, "jondoe").await?;
    driver.type_into(SECOND_PASSWORD_REGISTER_SELECTOR, "jondoe").await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;

    let call = driver.wait_for_call(call_timeout).await?;
    tracing::debug!(method = %call.method, url = %call.url, status = call.status, "registration call resolved");
    if call.status == EXPECTED_STATUS {
        return Ok(());
    }
    Err(ScenarioError::UnexpectedStatus {
        status: call.status,
        expected: EXPECTED_STATUS,
    })
}
