//! Chrome DevTools Protocol adapter for the [`PageDriver`] port.
//!
//! Drives a headless Chrome session: native input for clicks and typing,
//! small script evaluations for blur and class reads, and correlation of
//! `Network.requestWillBeSent` / `Network.responseReceived` events to
//! resolve armed interceptions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventRequestWillBeSent, EventResponseReceived,
};
use futures::StreamExt;
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;

use crate::modules::register_page::core::call_match::call_matches;
use crate::modules::register_page::ports::{DriverError, InterceptedCall, PageDriver};

const CHROME_ENV: &str = "CHROME";
const CHROME_CANDIDATES: [&str; 5] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Chrome executable to drive: the `CHROME` override when set, otherwise
/// the first well-known name found on `PATH`.
pub fn chrome_executable() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CHROME_ENV) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for candidate in CHROME_CANDIDATES {
            let full = dir.join(candidate);
            if full.is_file() {
                return Some(full);
            }
        }
    }
    None
}

struct ArmedInterception {
    rx: oneshot::Receiver<InterceptedCall>,
    watcher_task: JoinHandle<()>,
}

pub struct ChromiumDriver {
    base_url: String,
    browser: Browser,
    page: chromiumoxide::Page,
    handler_task: JoinHandle<()>,
    armed: Mutex<Option<ArmedInterception>>,
}

fn backend(err: impl std::fmt::Display) -> DriverError {
    DriverError::Backend(err.to_string())
}

impl ChromiumDriver {
    pub async fn launch(base_url: impl Into<String>, headful: bool) -> Result<Self, DriverError> {
        let executable = chrome_executable()
            .ok_or_else(|| DriverError::Launch("no chrome executable found".into()))?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(executable)
            .no_sandbox()
            .window_size(1280, 800);
        if headful {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(DriverError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|err| DriverError::Launch(err.to_string()))?;
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let page = browser.new_page("about:blank").await.map_err(backend)?;
        page.execute(EnableParams::default()).await.map_err(backend)?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!(%base_url, "chromium session ready");

        Ok(Self {
            base_url,
            browser,
            page,
            handler_task,
            armed: Mutex::new(None),
        })
    }

    pub async fn close(mut self) -> Result<(), DriverError> {
        self.browser.close().await.map_err(backend)?;
        Ok(())
    }

    async fn evaluate<T>(&self, expression: String) -> Result<T, DriverError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.page
            .evaluate(expression)
            .await
            .map_err(backend)?
            .into_value()
            .map_err(backend)
    }
}

impl Drop for ChromiumDriver {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

#[async_trait]
impl PageDriver for ChromiumDriver {
    async fn goto(&self, path: &str) -> Result<(), DriverError> {
        let url = format!("{}{path}", self.base_url);
        self.page.goto(url).await.map_err(backend)?;
        self.page.wait_for_navigation().await.map_err(backend)?;
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<(), DriverError> {
        self.page.wait_for_navigation().await.map_err(backend)?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let url = self.page.url().await.map_err(backend)?;
        url.ok_or_else(|| DriverError::Backend("page reported no url".into()))
    }

    async fn is_present(&self, selector: &str) -> Result<bool, DriverError> {
        let expression = format!("document.querySelector({selector:?}) !== null");
        self.evaluate(expression).await
    }

    async fn click(&self, selector: &str) -> Result<(), DriverError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| DriverError::MissingElement {
                selector: selector.to_string(),
            })?;
        element.click().await.map_err(backend)?;
        Ok(())
    }

    async fn type_into(&self, selector: &str, text: &str) -> Result<(), DriverError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| DriverError::MissingElement {
                selector: selector.to_string(),
            })?;
        element.click().await.map_err(backend)?;
        element.type_str(text).await.map_err(backend)?;
        Ok(())
    }

    async fn blur(&self, selector: &str) -> Result<(), DriverError> {
        let expression = format!(
            "(() => {{ const el = document.querySelector({selector:?}); if (!el) return false; el.blur(); return true; }})()"
        );
        let found: bool = self.evaluate(expression).await?;
        if found {
            return Ok(());
        }
        Err(DriverError::MissingElement {
            selector: selector.to_string(),
        })
    }

    async fn classes_of(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        let expression = format!(
            "(() => {{ const el = document.querySelector({selector:?}); return el ? Array.from(el.classList).join(' ') : null; }})()"
        );
        let classes: Option<String> = self.evaluate(expression).await?;
        match classes {
            Some(joined) => Ok(joined.split_whitespace().map(str::to_string).collect()),
            None => Err(DriverError::MissingElement {
                selector: selector.to_string(),
            }),
        }
    }

    async fn arm_interception(&self, method: &str, path: &str) -> Result<(), DriverError> {
        let mut requests = self
            .page
            .event_listener::<EventRequestWillBeSent>()
            .await
            .map_err(backend)?;
        let mut responses = self
            .page
            .event_listener::<EventResponseReceived>()
            .await
            .map_err(backend)?;

        let wanted_method = method.to_string();
        let wanted_path = path.to_string();
        let (tx, rx) = oneshot::channel();

        let watcher_task = tokio::spawn(async move {
            let mut pending: HashMap<String, (String, String)> = HashMap::new();
            loop {
                tokio::select! {
                    request = requests.next() => {
                        let Some(request) = request else { break };
                        if call_matches(
                            &request.request.method,
                            &request.request.url,
                            &wanted_method,
                            &wanted_path,
                        ) {
                            pending.insert(
                                request.request_id.inner().clone(),
                                (request.request.method.clone(), request.request.url.clone()),
                            );
                        }
                    }
                    response = responses.next() => {
                        let Some(response) = response else { break };
                        if let Some((method, url)) = pending.remove(response.request_id.inner()) {
                            let call = InterceptedCall {
                                method,
                                url,
                                status: u16::try_from(response.response.status).unwrap_or(0),
                            };
                            let _ = tx.send(call);
                            break;
                        }
                    }
                }
            }
        });

        *self.armed.lock().await = Some(ArmedInterception { rx, watcher_task });
        Ok(())
    }

    async fn wait_for_call(&self, timeout: Duration) -> Result<InterceptedCall, DriverError> {
        let ArmedInterception { rx, watcher_task } = self
            .armed
            .lock()
            .await
            .take()
            .ok_or(DriverError::InterceptNotArmed)?;

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(call)) => Ok(call),
            Ok(Err(_)) => Err(DriverError::Backend(
                "interception watcher dropped before resolving".into(),
            )),
            Err(_) => {
                watcher_task.abort();
                Err(DriverError::InterceptTimeout {
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                })
            }
        }
    }
}
