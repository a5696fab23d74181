use thiserror::Error;

use crate::modules::register_page::ports::{DriverError, PageDriver};
use crate::shared::core::selectors::{CLASS_INVALID, CLASS_VALID};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("expected {selector} to carry class `{expected}`, found [{found}]")]
    MarkerClassMismatch {
        selector: String,
        expected: &'static str,
        found: String,
    },

    #[error("expected url ending in {suffix}, found {url}")]
    UrlMismatch { suffix: String, url: String },

    #[error("registration call resolved with status {status}, expected {expected}")]
    UnexpectedStatus { status: u16, expected: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::Valid => CLASS_VALID,
            Self::Invalid => CLASS_INVALID,
        }
    }
}

pub async fn expect_validity<D: PageDriver>(
    driver: &D,
    selector: &str,
    validity: Validity,
) -> Result<(), ScenarioError> {
    let classes = driver.classes_of(selector).await?;
    let expected = validity.marker_class();
    if classes.iter().any(|class| class == expected) {
        return Ok(());
    }
    Err(ScenarioError::MarkerClassMismatch {
        selector: selector.to_string(),
        expected,
        found: classes.join(" "),
    })
}

pub async fn expect_url_suffix<D: PageDriver>(
    driver: &D,
    suffix: &str,
) -> Result<(), ScenarioError> {
    let url = driver.current_url().await?;
    if url.ends_with(suffix) {
        return Ok(());
    }
    Err(ScenarioError::UrlMismatch {
        suffix: suffix.to_string(),
        url,
    })
}

/// Type into the field and blur it, the re-validation trigger.
pub async fn fill_and_blur<D: PageDriver>(
    driver: &D,
    selector: &str,
    text: &str,
) -> Result<(), ScenarioError> {
    driver.type_into(selector, text).await?;
    driver.blur(selector).await?;
    Ok(())
}
