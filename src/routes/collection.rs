//! Handlers shared by every list view. Each user action is one POST that
//! updates the view state and redirects back to the list.

use crate::app_state::AppState;
use crate::notifications::NotificationBoard;
use crate::templates::{HtmlTemplate, ListTemplate};
use crate::views::{ListHandle, Listed};
use axum::extract::{FromRef, Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::time::Instant;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<usize>,
}

pub fn collection_routes<E: Listed>() -> Router<AppState>
where
    ListHandle<E>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(index::<E>))
        .route("/add/open", post(open_add::<E>))
        .route("/add/cancel", post(cancel_add::<E>))
        .route("/add", post(add::<E>))
        .route("/:id/edit/open", post(open_edit::<E>))
        .route("/edit/cancel", post(cancel_edit::<E>))
        .route("/edit", post(edit::<E>))
        .route("/:id/delete", post(request_delete::<E>))
        .route("/delete/accept", post(accept_delete::<E>))
        .route("/delete/reject", post(reject_delete::<E>))
}

fn back_to_list<E: Listed>() -> Redirect {
    Redirect::to(&format!("/{}", E::COLLECTION))
}

fn submitted(fields: &HashMap<String, String>) -> impl Iterator<Item = (&str, &str)> {
    fields.iter().map(|(name, text)| (name.as_str(), text.as_str()))
}

pub async fn index<E: Listed>(
    State(handle): State<ListHandle<E>>,
    State(board): State<NotificationBoard>,
    Query(query): Query<PageQuery>,
) -> HtmlTemplate<ListTemplate> {
    handle.mount().await;
    let mut view = handle.view().await;
    if let Some(page) = query.page {
        view.set_page(page);
    }
    HtmlTemplate(ListTemplate::from_view(
        &view,
        &board.snapshot(Instant::now()),
    ))
}

pub async fn open_add<E: Listed>(State(handle): State<ListHandle<E>>) -> Redirect {
    handle.view().await.add_dialog.open_empty();
    back_to_list::<E>()
}

pub async fn cancel_add<E: Listed>(State(handle): State<ListHandle<E>>) -> Redirect {
    handle.view().await.add_dialog.close();
    back_to_list::<E>()
}

pub async fn add<E: Listed>(
    State(handle): State<ListHandle<E>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    handle.view().await.add_dialog.bind(submitted(&fields));
    handle.create().await;
    back_to_list::<E>()
}

pub async fn open_edit<E: Listed>(
    State(handle): State<ListHandle<E>>,
    Path(id): Path<i64>,
) -> Redirect {
    if !handle.view().await.open_edit(id) {
        warn!("no {} row with id {id} to edit", E::COLLECTION);
    }
    back_to_list::<E>()
}

pub async fn cancel_edit<E: Listed>(State(handle): State<ListHandle<E>>) -> Redirect {
    handle.view().await.edit_dialog.close();
    back_to_list::<E>()
}

pub async fn edit<E: Listed>(
    State(handle): State<ListHandle<E>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    handle.view().await.edit_dialog.bind(submitted(&fields));
    handle.update().await;
    back_to_list::<E>()
}

pub async fn request_delete<E: Listed>(
    State(handle): State<ListHandle<E>>,
    Path(id): Path<i64>,
) -> Redirect {
    handle.view().await.confirm.request(id);
    back_to_list::<E>()
}

pub async fn accept_delete<E: Listed>(State(handle): State<ListHandle<E>>) -> Redirect {
    handle.confirm_remove().await;
    back_to_list::<E>()
}

pub async fn reject_delete<E: Listed>(State(handle): State<ListHandle<E>>) -> Redirect {
    handle.view().await.confirm.reject();
    back_to_list::<E>()
}
