use axum::response::Redirect;

pub const LANDING_PAGE: &str = "/static/index.html";

// 307 keeps the request method, unlike `Redirect::to`.
pub async fn root_handler() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}
