use std::time::Duration;

const BASE_URL_ENV: &str = "E2E_BASE_URL";
const HEADFUL_ENV: &str = "E2E_HEADFUL";
const CALL_TIMEOUT_ENV: &str = "E2E_CALL_TIMEOUT_MS";
const HTTP_ADDR_ENV: &str = "HTTP_ADDR";

const DEFAULT_CALL_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Harness settings. Without `E2E_BASE_URL` the suite runs hermetically
/// against its own fixture server.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: Option<String>,
    pub headful: bool,
    pub call_timeout: Duration,
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|value| !value.is_empty())
            .map(|value| value.trim_end_matches('/').to_string());
        let headful = lookup(HEADFUL_ENV)
            .is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));
        let call_timeout = lookup(CALL_TIMEOUT_ENV)
            .and_then(|value| value.parse().ok())
            .map_or(Duration::from_millis(DEFAULT_CALL_TIMEOUT_MS), Duration::from_millis);
        Self {
            base_url,
            headful,
            call_timeout,
        }
    }
}

/// Bind address for the standalone fixture binary.
pub fn http_addr() -> String {
    std::env::var(HTTP_ADDR_ENV).unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string())
}
