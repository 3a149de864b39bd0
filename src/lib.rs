pub mod app_state;
pub mod configuration;
pub mod data_models;
pub mod errors;
pub mod notifications;
pub mod remote;
mod routes;
mod templates;
pub mod views;

use crate::app_state::AppState;
use crate::configuration::Settings;
use crate::data_models::{Categoria, Producto};
use crate::errors::Error;
use crate::remote::Resource;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_app(settings: &Settings) -> Result<(Router, AppState), Error> {
    let app_state = AppState::init(settings)?;
    let app = Router::new()
        .route("/", get(routes::home))
        .route("/health_check", get(routes::health_check))
        .route(
            "/notifications/:id/dismiss",
            post(routes::dismiss_notification),
        )
        .nest(
            &format!("/{}", Producto::COLLECTION),
            routes::collection_routes::<Producto>(),
        )
        .nest(
            &format!("/{}", Categoria::COLLECTION),
            routes::collection_routes::<Categoria>(),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.clone());
    Ok((app, app_state))
}
