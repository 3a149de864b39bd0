use crate::views::form::FormBuffer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A record kept in one collection of the REST backend.
///
/// `Draft` is the partially filled shape sent on create and bound to the
/// dialog inputs; the full record is what the backend returns and what is
/// sent back on update.
pub trait Resource: Debug + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: FormBuffer + Debug + Serialize + Send + Sync + 'static;

    /// Path segment of the collection, e.g. `productos`.
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    /// Builds the full record for `id` out of an edit buffer.
    fn from_draft(id: i64, draft: &Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;
}
