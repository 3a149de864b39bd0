use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// An edit buffer whose attributes are bound to named input fields.
pub trait FormBuffer: Default + Clone {
    const FIELDS: &'static [FormField];

    fn field_value(&self, name: &str) -> String;

    fn set_field(&mut self, name: &str, text: &str);
}

/// Parses a numeric input. Empty or unparsable text leaves the attribute unset.
pub fn parse_number<T>(name: &str, text: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ignoring non-numeric input {text:?} for {name}: {err}");
            None
        }
    }
}

pub fn optional_to_text<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// A dialog holding a transient buffer.
///
/// `editing` is the id of the row being edited; it stays `None` for the add
/// dialog.
#[derive(Debug, Clone)]
pub struct FormDialog<D> {
    visible: bool,
    buffer: D,
    editing: Option<i64>,
}

impl<D: FormBuffer> Default for FormDialog<D> {
    fn default() -> Self {
        Self {
            visible: false,
            buffer: D::default(),
            editing: None,
        }
    }
}

impl<D: FormBuffer> FormDialog<D> {
    pub fn open_empty(&mut self) {
        self.buffer = D::default();
        self.editing = None;
        self.visible = true;
    }

    pub fn open_with(&mut self, id: i64, buffer: D) {
        self.buffer = buffer;
        self.editing = Some(id);
        self.visible = true;
    }

    /// Hides the dialog and throws the buffer away.
    pub fn close(&mut self) {
        self.visible = false;
        self.buffer = D::default();
        self.editing = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn buffer(&self) -> &D {
        &self.buffer
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Writes every submitted field into the buffer; unknown names are skipped.
    pub fn bind<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, text) in fields {
            if D::FIELDS.iter().any(|field| field.name == name) {
                self.buffer.set_field(name, text);
            }
        }
    }
}

/// Gate in front of a destructive delete.
#[derive(Debug, Clone, Default)]
pub struct ConfirmPrompt {
    pending: Option<i64>,
}

impl ConfirmPrompt {
    pub fn request(&mut self, id: i64) {
        self.pending = Some(id);
    }

    pub fn reject(&mut self) {
        self.pending = None;
    }

    /// Closes the prompt and hands back the id to remove.
    pub fn accept(&mut self) -> Option<i64> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<i64> {
        self.pending
    }
}
