use crate::notifications::Notifier;
use crate::remote::{RemoteError, ResourceClient};
use crate::views::{ListView, Listed};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

/// A list view together with the client and notifier its operations use.
///
/// The view lock is never held across a network call, so overlapping
/// operations interleave and whichever response lands last is applied last.
#[derive(Debug, Clone)]
pub struct ListHandle<E: Listed> {
    view: Arc<Mutex<ListView<E>>>,
    client: ResourceClient<E>,
    notifier: Notifier,
}

impl<E: Listed> ListHandle<E> {
    pub fn new(client: ResourceClient<E>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            view: Arc::new(Mutex::new(ListView::new(page_size))),
            client,
            notifier,
        }
    }

    pub async fn view(&self) -> MutexGuard<'_, ListView<E>> {
        self.view.lock().await
    }

    /// Fetches the whole collection unless it is loaded or already loading.
    pub async fn mount(&self) {
        if !self.view.lock().await.begin_loading() {
            return;
        }
        match self.client.list_all().await {
            Ok(items) => {
                info!("loaded {} {}", items.len(), E::COLLECTION);
                self.view.lock().await.loaded(items);
            }
            Err(err) => {
                self.view.lock().await.load_failed();
                self.report(E::WORDING.fetch_failed, &err);
            }
        }
    }

    /// Sends the add dialog buffer. On success the dialog closes and its
    /// buffer is reset; on failure both stay as they were. Nothing is sent
    /// while the dialog is closed.
    pub async fn create(&self) -> Option<E> {
        let draft = {
            let view = self.view.lock().await;
            if !view.add_dialog.is_visible() {
                return None;
            }
            view.add_dialog.buffer().clone()
        };
        match self.client.create(&draft).await {
            Ok(created) => {
                info!("created {} {}", E::COLLECTION, created.id());
                let mut view = self.view.lock().await;
                view.apply_created(created.clone());
                view.add_dialog.close();
                self.notifier.success(E::WORDING.created);
                Some(created)
            }
            Err(err) => {
                self.report(E::WORDING.create_failed, &err);
                None
            }
        }
    }

    /// Sends the edit dialog buffer as the full record of the row being edited.
    pub async fn update(&self) -> Option<E> {
        let (id, entity) = {
            let view = self.view.lock().await;
            let Some(id) = view.edit_dialog.editing() else {
                return None;
            };
            (id, E::from_draft(id, view.edit_dialog.buffer()))
        };
        match self.client.update(id, &entity).await {
            Ok(saved) => {
                info!("updated {} {id}", E::COLLECTION);
                let mut view = self.view.lock().await;
                view.apply_updated(id, saved.clone());
                // the dialog may have been reopened for another row meanwhile
                if view.edit_dialog.editing() == Some(id) {
                    view.edit_dialog.close();
                }
                self.notifier.success(E::WORDING.updated);
                Some(saved)
            }
            Err(err) => {
                self.report(E::WORDING.update_failed, &err);
                None
            }
        }
    }

    /// Runs the removal waiting behind the confirmation prompt, if any.
    pub async fn confirm_remove(&self) -> bool {
        let pending = self.view.lock().await.confirm.accept();
        match pending {
            Some(id) => self.remove(id).await,
            None => false,
        }
    }

    pub async fn remove(&self, id: i64) -> bool {
        match self.client.remove(id).await {
            Ok(()) => {
                info!("removed {} {id}", E::COLLECTION);
                self.view.lock().await.apply_removed(id);
                self.notifier.success(E::WORDING.removed);
                true
            }
            Err(err) => {
                self.report(E::WORDING.remove_failed, &err);
                false
            }
        }
    }

    fn report(&self, prefix: &str, err: &RemoteError) {
        error!("{prefix}: {err}");
        self.notifier.error(format!("{prefix}: {err}"));
    }
}
