mod collection;

use crate::notifications::NotificationBoard;
use crate::templates::{HomeTemplate, HtmlTemplate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;
use tokio::time::Instant;
use uuid::Uuid;

pub use collection::collection_routes;

#[derive(Debug, Deserialize)]
pub struct BackTo {
    back: Option<String>,
}

pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn home(State(board): State<NotificationBoard>) -> HtmlTemplate<HomeTemplate> {
    HtmlTemplate(HomeTemplate::new(&board.snapshot(Instant::now())))
}

pub async fn dismiss_notification(
    State(board): State<NotificationBoard>,
    Path(id): Path<Uuid>,
    Form(form): Form<BackTo>,
) -> Redirect {
    board.dismiss(id);
    Redirect::to(local_path(form.back.as_deref()))
}

/// Only same-origin absolute paths are followed, anything else goes home.
fn local_path(back: Option<&str>) -> &str {
    match back {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}
