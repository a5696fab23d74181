// In-memory stand-in for the rendered registration pages. It honors the
// same validation rules as the fixture page script, so scenario procedures
// can be exercised without a browser.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::register_page::core::call_match::call_matches;
use crate::modules::register_page::ports::{DriverError, InterceptedCall, PageDriver};
use crate::shared::core::selectors::{
    CLASS_INVALID, CLASS_VALID, EMAIL_REGISTER_SELECTOR, FIRST_PASSWORD_REGISTER_SELECTOR,
    REGISTER_API_PATH, REGISTER_ITEM_SELECTOR, REGISTER_ROUTE, REQUIRED_REGISTER_FIELDS,
    SECOND_PASSWORD_REGISTER_SELECTOR, SUBMIT_REGISTER_SELECTOR, USERNAME_REGISTER_SELECTOR,
};
use crate::shared::core::validation::{
    confirmation_matches, email_is_valid, login_is_valid, password_is_valid,
};

const BASE_URL: &str = "http://scripted.local";

#[derive(Default, Clone)]
struct FieldState {
    value: String,
    classes: Vec<String>,
}

#[derive(Default)]
struct PageModel {
    location: String,
    fields: HashMap<String, FieldState>,
    removed: HashSet<String>,
    armed: Option<(String, String)>,
    intercepted: Option<InterceptedCall>,
    register_status: u16,
}

impl PageModel {
    fn on_register_page(&self) -> bool {
        self.location == REGISTER_ROUTE
    }

    fn has_element(&self, selector: &str) -> bool {
        if self.removed.contains(selector) {
            return false;
        }
        if self.on_register_page() {
            selector == REGISTER_ITEM_SELECTOR
                || selector == SUBMIT_REGISTER_SELECTOR
                || self.fields.contains_key(selector)
        } else {
            selector == REGISTER_ITEM_SELECTOR
        }
    }

    fn open_register_page(&mut self) {
        self.location = REGISTER_ROUTE.to_string();
        self.fields = REQUIRED_REGISTER_FIELDS
            .iter()
            .map(|selector| (selector.to_string(), FieldState::default()))
            .collect();
    }

    fn refresh_validity(&mut self, selector: &str) -> bool {
        let first_password = self
            .fields
            .get(FIRST_PASSWORD_REGISTER_SELECTOR)
            .map(|field| field.value.clone())
            .unwrap_or_default();
        let Some(field) = self.fields.get_mut(selector) else {
            return false;
        };
        let ok = if selector == USERNAME_REGISTER_SELECTOR {
            login_is_valid(&field.value)
        } else if selector == EMAIL_REGISTER_SELECTOR {
            email_is_valid(&field.value)
        } else if selector == FIRST_PASSWORD_REGISTER_SELECTOR {
            password_is_valid(&field.value)
        } else if selector == SECOND_PASSWORD_REGISTER_SELECTOR {
            confirmation_matches(&first_password, &field.value)
        } else {
            false
        };
        let class = if ok { CLASS_VALID } else { CLASS_INVALID };
        field.classes = vec![class.to_string()];
        ok
    }

    fn submit(&mut self) {
        let mut all_ok = true;
        for selector in REQUIRED_REGISTER_FIELDS {
            all_ok = self.refresh_validity(selector) && all_ok;
        }
        if !all_ok {
            return;
        }
        let url = format!("{BASE_URL}{REGISTER_API_PATH}");
        if let Some((method, path)) = self.armed.clone() {
            if call_matches("POST", &url, &method, &path) {
                self.intercepted = Some(InterceptedCall {
                    method: "POST".to_string(),
                    url,
                    status: self.register_status,
                });
            }
        }
    }
}

pub struct ScriptedPage {
    model: Mutex<PageModel>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self {
            model: Mutex::new(PageModel {
                register_status: 201,
                ..PageModel::default()
            }),
        }
    }

    /// Script the status the registration call resolves with.
    pub async fn set_register_status(&self, status: u16) {
        self.model.lock().await.register_status = status;
    }

    /// Script the element away, across navigations.
    pub async fn remove_element(&self, selector: &str) {
        self.model.lock().await.removed.insert(selector.to_string());
    }
}

impl Default for ScriptedPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageDriver for ScriptedPage {
    async fn goto(&self, path: &str) -> Result<(), DriverError> {
        let mut model = self.model.lock().await;
        if path == REGISTER_ROUTE {
            model.open_register_page();
        } else {
            model.location = path.to_string();
            model.fields.clear();
        }
        Ok(())
    }

    async fn wait_for_navigation(&self) -> Result<(), DriverError> {
        // Navigation settles synchronously in the model.
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let model = self.model.lock().await;
        Ok(format!("{BASE_URL}{}", model.location))
    }

    async fn is_present(&self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.model.lock().await.has_element(selector))
    }

    async fn click(&self, selector: &str) -> Result<(), DriverError> {
        let mut model = self.model.lock().await;
        if !model.has_element(selector) {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
            });
        }
        if selector == REGISTER_ITEM_SELECTOR {
            model.open_register_page();
        } else if selector == SUBMIT_REGISTER_SELECTOR {
            model.submit();
        }
        Ok(())
    }

    async fn type_into(&self, selector: &str, text: &str) -> Result<(), DriverError> {
        let mut model = self.model.lock().await;
        if !model.has_element(selector) {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
            });
        }
        let Some(field) = model.fields.get_mut(selector) else {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
            });
        };
        field.value.push_str(text);
        Ok(())
    }

    async fn blur(&self, selector: &str) -> Result<(), DriverError> {
        let mut model = self.model.lock().await;
        if !model.has_element(selector) {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
            });
        }
        model.refresh_validity(selector);
        Ok(())
    }

    async fn classes_of(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        let model = self.model.lock().await;
        if !model.has_element(selector) {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
            });
        }
        Ok(model
            .fields
            .get(selector)
            .map(|field| field.classes.clone())
            .unwrap_or_default())
    }

    async fn arm_interception(&self, method: &str, path: &str) -> Result<(), DriverError> {
        let mut model = self.model.lock().await;
        model.armed = Some((method.to_string(), path.to_string()));
        model.intercepted = None;
        Ok(())
    }

    async fn wait_for_call(&self, timeout: Duration) -> Result<InterceptedCall, DriverError> {
        let mut model = self.model.lock().await;
        if model.armed.take().is_none() {
            return Err(DriverError::InterceptNotArmed);
        }
        model.intercepted.take().ok_or(DriverError::InterceptTimeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
mod scripted_page_tests {
    use super::*;

    #[tokio::test]
    async fn typing_appends_and_blur_validates() {
        let page = ScriptedPage::new();
        page.goto(REGISTER_ROUTE).await.expect("goto failed");

        page.type_into(USERNAME_REGISTER_SELECTOR, "te").await.expect("type failed");
        page.type_into(USERNAME_REGISTER_SELECTOR, "st").await.expect("type failed");
        page.blur(USERNAME_REGISTER_SELECTOR).await.expect("blur failed");

        let classes = page
            .classes_of(USERNAME_REGISTER_SELECTOR)
            .await
            .expect("classes failed");
        assert_eq!(classes, vec![CLASS_VALID.to_string()]);
    }

    #[tokio::test]
    async fn wait_for_call_requires_arming_first() {
        let page = ScriptedPage::new();
        let result = page.wait_for_call(Duration::from_millis(10)).await;
        assert!(matches!(result, Err(DriverError::InterceptNotArmed)));
    }

    #[tokio::test]
    async fn wait_for_call_times_out_without_a_submission() {
        let page = ScriptedPage::new();
        page.arm_interception("POST", REGISTER_API_PATH)
            .await
            .expect("arm failed");

        let result = page.wait_for_call(Duration::from_millis(10)).await;
        assert!(matches!(
            result,
            Err(DriverError::InterceptTimeout { timeout_ms: 10 })
        ));
    }

    #[tokio::test]
    async fn unknown_selectors_are_reported_missing() {
        let page = ScriptedPage::new();
        page.goto(REGISTER_ROUTE).await.expect("goto failed");

        let result = page.click("#activate-submit").await;
        assert!(matches!(result, Err(DriverError::MissingElement { .. })));
    }
}
