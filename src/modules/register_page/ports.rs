use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("no element matches selector {selector}")]
    MissingElement { selector: String },

    #[error("interception is not armed")]
    InterceptNotArmed,

    #[error("no matching call observed within {timeout_ms} ms")]
    InterceptTimeout { timeout_ms: u64 },
}

/// One observed request/response pair for an armed interception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptedCall {
    pub method: String,
    pub url: String,
    pub status: u16,
}

/// The browser verbs the registration scenarios need. Implemented by the
/// chromium adapter and, under test, by the scripted page double.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a path below the driver's base url.
    async fn goto(&self, path: &str) -> Result<(), DriverError>;

    /// Settle an in-flight navigation, e.g. after clicking a link.
    async fn wait_for_navigation(&self) -> Result<(), DriverError>;

    async fn current_url(&self) -> Result<String, DriverError>;

    async fn is_present(&self, selector: &str) -> Result<bool, DriverError>;

    async fn click(&self, selector: &str) -> Result<(), DriverError>;

    async fn type_into(&self, selector: &str, text: &str) -> Result<(), DriverError>;

    /// Remove focus from the element, the trigger point at which the page
    /// re-evaluates validation.
    async fn blur(&self, selector: &str) -> Result<(), DriverError>;

    async fn classes_of(&self, selector: &str) -> Result<Vec<String>, DriverError>;

    /// Start observing calls matching the method and path. A later
    /// [`PageDriver::wait_for_call`] resolves with the first match.
    async fn arm_interception(&self, method: &str, path: &str) -> Result<(), DriverError>;

    async fn wait_for_call(&self, timeout: Duration) -> Result<InterceptedCall, DriverError>;
}
