// DOM and route contract between the registration pages and the harness.
// An external deployment under test must expose the same ids, marker
// classes and routes; everything else reads them from here.

pub const REGISTER_ROUTE: &str = "/account/register";
pub const REGISTER_API_PATH: &str = "/api/register";

pub const USERNAME_REGISTER_SELECTOR: &str = "#username";
pub const EMAIL_REGISTER_SELECTOR: &str = "#email";
pub const FIRST_PASSWORD_REGISTER_SELECTOR: &str = "#first-password";
pub const SECOND_PASSWORD_REGISTER_SELECTOR: &str = "#second-password";
pub const SUBMIT_REGISTER_SELECTOR: &str = "#register-submit";
pub const REGISTER_ITEM_SELECTOR: &str = "#register-item";

pub const CLASS_VALID: &str = "valid";
pub const CLASS_INVALID: &str = "invalid";

// Validation re-evaluates on blur or submit for each of these.
pub const REQUIRED_REGISTER_FIELDS: [&str; 4] = [
    USERNAME_REGISTER_SELECTOR,
    EMAIL_REGISTER_SELECTOR,
    FIRST_PASSWORD_REGISTER_SELECTOR,
    SECOND_PASSWORD_REGISTER_SELECTOR,
];

/// Element id behind an id selector, if it is one.
pub fn element_id(selector: &str) -> Option<&str> {
    selector.strip_prefix('#')
}
