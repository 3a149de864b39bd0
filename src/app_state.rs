use crate::configuration::Settings;
use crate::data_models::{Categoria, Producto};
use crate::errors::AppErrors;
use crate::notifications::{NotificationBoard, Notifier};
use crate::remote::ResourceClient;
use crate::views::ListHandle;
use axum::extract::FromRef;

#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub productos: ListHandle<Producto>,
    pub categorias: ListHandle<Categoria>,
    pub notifications: NotificationBoard,
}

impl AppState {
    /// Builds both list views and starts the notification sweeper, so it has
    /// to run inside a tokio runtime.
    pub fn init(settings: &Settings) -> Result<Self, AppErrors> {
        let (notifier, rx) = Notifier::channel(
            settings.notifications.capacity,
            settings.notifications.life,
        );
        let notifications = NotificationBoard::new(rx);
        notifications.spawn_sweeper(settings.notifications.sweep_interval);

        let backend = &settings.backend;
        let page_size = settings.views.page_size;
        Ok(Self {
            productos: ListHandle::new(
                ResourceClient::new(&backend.base_url, backend.request_timeout)?,
                notifier.clone(),
                page_size,
            ),
            categorias: ListHandle::new(
                ResourceClient::new(&backend.base_url, backend.request_timeout)?,
                notifier,
                page_size,
            ),
            notifications,
        })
    }
}
