use crate::notifications::Notification;
use crate::views::form::{FormBuffer, FormDialog};
use crate::views::{ListView, Listed, LoadStatus, Wording};
use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub back: String,
    pub notifications: Vec<ToastView>,
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub back: String,
    pub collection: &'static str,
    pub wording: Wording,
    pub headers: &'static [&'static str],
    pub loading: bool,
    pub rows: Vec<RowView>,
    pub pages: Vec<PageLink>,
    pub add_dialog: Option<DialogView>,
    pub edit_dialog: Option<DialogView>,
    pub confirm: Option<i64>,
    pub notifications: Vec<ToastView>,
}

pub struct RowView {
    pub id: i64,
    pub cells: Vec<String>,
}

pub struct PageLink {
    pub number: usize,
    pub current: bool,
}

pub struct DialogView {
    pub header: &'static str,
    pub action: String,
    pub cancel: String,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
}

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
}

pub struct ToastView {
    pub id: String,
    pub severity: String,
    pub summary: String,
    pub detail: String,
}

impl From<&Notification> for ToastView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            severity: notification.severity.to_string(),
            summary: notification.summary.clone(),
            detail: notification.detail.clone(),
        }
    }
}

impl HomeTemplate {
    pub fn new(notifications: &[Notification]) -> Self {
        Self {
            back: "/".to_string(),
            notifications: notifications.iter().map(ToastView::from).collect(),
        }
    }
}

impl ListTemplate {
    pub fn from_view<E: Listed>(view: &ListView<E>, notifications: &[Notification]) -> Self {
        let collection = E::COLLECTION;
        let wording = E::WORDING;
        let add_dialog = view.add_dialog.is_visible().then(|| DialogView {
            header: wording.add_header,
            action: format!("/{collection}/add"),
            cancel: format!("/{collection}/add/cancel"),
            submit_label: "Guardar",
            fields: field_views(&view.add_dialog),
        });
        let edit_dialog = view.edit_dialog.is_visible().then(|| DialogView {
            header: wording.edit_header,
            action: format!("/{collection}/edit"),
            cancel: format!("/{collection}/edit/cancel"),
            submit_label: "Actualizar",
            fields: field_views(&view.edit_dialog),
        });
        Self {
            back: format!("/{collection}"),
            collection,
            wording,
            headers: E::HEADERS,
            loading: view.status() == LoadStatus::Loading,
            rows: view
                .page_items()
                .iter()
                .map(|item| RowView {
                    id: item.id(),
                    cells: item.cells(),
                })
                .collect(),
            pages: (1..=view.page_count())
                .map(|number| PageLink {
                    number,
                    current: number == view.page(),
                })
                .collect(),
            add_dialog,
            edit_dialog,
            confirm: view.confirm.pending(),
            notifications: notifications.iter().map(ToastView::from).collect(),
        }
    }
}

fn field_views<D: FormBuffer>(dialog: &FormDialog<D>) -> Vec<FieldView> {
    D::FIELDS
        .iter()
        .map(|field| FieldView {
            name: field.name,
            label: field.label,
            input_type: field.kind.input_type(),
            value: dialog.buffer().field_value(field.name),
        })
        .collect()
}

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}
