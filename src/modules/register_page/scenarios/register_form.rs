use crate::modules::register_page::ports::{DriverError, PageDriver};
use crate::modules::register_page::scenarios::support::{
    ScenarioError, Validity, expect_validity, fill_and_blur,
};
use crate::shared::core::selectors::{
    EMAIL_REGISTER_SELECTOR, FIRST_PASSWORD_REGISTER_SELECTOR, REGISTER_ROUTE,
    REQUIRED_REGISTER_FIELDS, SECOND_PASSWORD_REGISTER_SELECTOR, SUBMIT_REGISTER_SELECTOR,
    USERNAME_REGISTER_SELECTOR,
};

/// The register page loads and shows the submit button.
pub async fn register_page_shows_submit_button<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    if driver.is_present(SUBMIT_REGISTER_SELECTOR).await? {
        return Ok(());
    }
    Err(ScenarioError::Driver(DriverError::MissingElement {
        selector: SUBMIT_REGISTER_SELECTOR.to_string(),
    }))
}

/// Submitting the empty form marks every required field invalid.
pub async fn submit_on_empty_form_marks_required_fields_invalid<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    for selector in REQUIRED_REGISTER_FIELDS {
        expect_validity(driver, selector, Validity::Invalid).await?;
    }
    Ok(())
}

pub async fn username_becomes_valid_after_blur<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, USERNAME_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, USERNAME_REGISTER_SELECTOR, "test").await?;
    expect_validity(driver, USERNAME_REGISTER_SELECTOR, Validity::Valid).await
}

pub async fn email_stays_invalid_without_at_sign<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, EMAIL_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, EMAIL_REGISTER_SELECTOR, "testtest.fr").await?;
    expect_validity(driver, EMAIL_REGISTER_SELECTOR, Validity::Invalid).await
}

pub async fn email_becomes_valid_in_correct_format<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, EMAIL_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, EMAIL_REGISTER_SELECTOR, "test@test.fr").await?;
    expect_validity(driver, EMAIL_REGISTER_SELECTOR, Validity::Valid).await
}

// Only proves a non-empty value becomes valid; the empty-value rejection is
// the submit-click assertion at the start.
pub async fn first_password_becomes_valid_when_filled<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, FIRST_PASSWORD_REGISTER_SELECTOR, "test@test.fr").await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Valid).await
}

pub async fn matching_passwords_become_valid<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, FIRST_PASSWORD_REGISTER_SELECTOR, "test").await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Valid).await?;
    expect_validity(driver, SECOND_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, SECOND_PASSWORD_REGISTER_SELECTOR, "test").await?;
    expect_validity(driver, SECOND_PASSWORD_REGISTER_SELECTOR, Validity::Valid).await
}

pub async fn mismatched_confirmation_is_marked_invalid<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto(REGISTER_ROUTE).await?;
    driver.click(SUBMIT_REGISTER_SELECTOR).await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, FIRST_PASSWORD_REGISTER_SELECTOR, "test").await?;
    expect_validity(driver, FIRST_PASSWORD_REGISTER_SELECTOR, Validity::Valid).await?;
    expect_validity(driver, SECOND_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await?;
    fill_and_blur(driver, SECOND_PASSWORD_REGISTER_SELECTOR, "otherPassword").await?;
    expect_validity(driver, SECOND_PASSWORD_REGISTER_SELECTOR, Validity::Invalid).await
}
