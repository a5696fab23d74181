use crate::modules::register_page::ports::PageDriver;
use crate::modules::register_page::scenarios::support::{ScenarioError, expect_url_suffix};
use crate::shared::core::selectors::{REGISTER_ITEM_SELECTOR, REGISTER_ROUTE};

/// The register page is reachable through the account menu on the home page.
pub async fn register_page_reachable_from_menu<D: PageDriver>(
    driver: &D,
) -> Result<(), ScenarioError> {
    driver.goto("").await?;
    driver.click(REGISTER_ITEM_SELECTOR).await?;
    driver.wait_for_navigation().await?;
    expect_url_suffix(driver, REGISTER_ROUTE).await
}
