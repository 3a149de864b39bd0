//! Per-entity list views: the cached collection, its dialogs and the
//! reconciliation applied after each remote operation.

pub mod form;
mod handle;

use crate::remote::Resource;
use form::{ConfirmPrompt, FormDialog};

pub use handle::ListHandle;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// User-facing texts of one list view.
#[derive(Debug, Clone, Copy)]
pub struct Wording {
    pub title: &'static str,
    pub add_button: &'static str,
    pub add_header: &'static str,
    pub edit_header: &'static str,
    pub confirm_delete: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub removed: &'static str,
    pub fetch_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub remove_failed: &'static str,
}

/// A resource that can be shown as a table row.
pub trait Listed: Resource {
    const WORDING: Wording;
    const HEADERS: &'static [&'static str];

    /// One text cell per entry of `HEADERS`.
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct ListView<E: Resource> {
    status: LoadStatus,
    items: Vec<E>,
    page: usize,
    page_size: usize,
    pub add_dialog: FormDialog<E::Draft>,
    pub edit_dialog: FormDialog<E::Draft>,
    pub confirm: ConfirmPrompt,
}

impl<E: Resource> ListView<E> {
    pub fn new(page_size: usize) -> Self {
        Self {
            status: LoadStatus::Idle,
            items: vec![],
            page: 1,
            page_size: page_size.max(1),
            add_dialog: FormDialog::default(),
            edit_dialog: FormDialog::default(),
            confirm: ConfirmPrompt::default(),
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Moves `Idle` to `Loading`. Returns false when a fetch is running or
    /// the collection is already loaded.
    pub fn begin_loading(&mut self) -> bool {
        if self.status != LoadStatus::Idle {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    pub fn loaded(&mut self, items: Vec<E>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
        self.clamp_page();
    }

    /// A failed fetch keeps no error state, the view goes back to `Idle`.
    pub fn load_failed(&mut self) {
        self.status = LoadStatus::Idle;
    }

    pub fn apply_created(&mut self, entity: E) {
        self.items.push(entity);
    }

    /// Replaces the row with `id` in place. Returns false if no row matched.
    pub fn apply_updated(&mut self, id: i64, entity: E) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                *item = entity;
                true
            }
            None => false,
        }
    }

    /// Drops the row with `id`, keeping the order of the rest.
    pub fn apply_removed(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.clamp_page();
        before != self.items.len()
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(item) = self.items.iter().find(|item| item.id() == id) else {
            return false;
        };
        let draft = item.to_draft();
        self.edit_dialog.open_with(id, draft);
        true
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn page_items(&self) -> &[E] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        self.items.get(start..end).unwrap_or_default()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }
}
