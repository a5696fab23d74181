use axum::response::Html;

// Pages are embedded so the fixture binary and the test server ship as a
// single artifact.
const HOME_PAGE: &str = include_str!("pages/home.html");
const REGISTER_PAGE: &str = include_str!("pages/register.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn register() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}
