use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use markup5ever_rcdom::{RcDom, SerializableHandle};

use crate::error::{AnnotateError, AnnotateResult};

/// Serialize the whole document back to HTML text
///
/// # Errors
///
/// Returns `AnnotateError::Serialize` if the serializer fails, or
/// `AnnotateError::Utf8` if it produced invalid UTF-8.
pub fn serialize_document(dom: &RcDom) -> AnnotateResult<String> {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let handle: SerializableHandle = SerializableHandle::from(dom.document.clone());
    let mut bytes = vec![];
    serialize(&mut bytes, &handle, opts).map_err(AnnotateError::Serialize)?;
    Ok(String::from_utf8(bytes)?)
}
