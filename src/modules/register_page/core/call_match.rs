// Matching rules for armed interceptions: the request method and the URL
// path must match exactly; scheme, authority, query and fragment are
// ignored.

pub fn url_path(url: &str) -> &str {
    let without_suffix = url.split(['?', '#']).next().unwrap_or(url);
    let rest = match without_suffix.split_once("://") {
        Some((_, rest)) => rest,
        // Already a path (relative request urls stay untouched).
        None => return without_suffix,
    };
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "/",
    }
}

pub fn call_matches(method: &str, url: &str, wanted_method: &str, wanted_path: &str) -> bool {
    method.eq_ignore_ascii_case(wanted_method) && url_path(url) == wanted_path
}
