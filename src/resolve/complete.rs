//! Key suggestions for a partially typed dotted path.

use super::from_dotted_path;
use crate::value::{Mapping, Value};

/// Candidate keys for the last segment of `partial`.
///
/// A path that already names a mapping (`company`, `company.`) offers that
/// mapping's keys; otherwise the last segment is treated as a prefix of the
/// keys of its parent. Paths that lead into a list, a scalar or nowhere
/// yield nothing.
pub fn dotted_path_completions(root: &Value, partial: &str) -> Vec<String> {
    let (parent_path, last) = match partial.rsplit_once('.') {
        Some((parent, last)) => (Some(parent), last),
        None => (None, partial),
    };

    let parent = match parent_path {
        Some(path) => match from_dotted_path(root, path) {
            Ok(found) => found,
            Err(_) => return Vec::new(),
        },
        None => std::borrow::Cow::Borrowed(root),
    };
    let Some(parent) = parent.as_mapping() else {
        return Vec::new();
    };

    if !last.is_empty() {
        if let Some(exact) = parent.get(last) {
            return exact.as_mapping().map(keys).unwrap_or_default();
        }
    }

    parent.keys().filter(|key| key.starts_with(last)).cloned().collect()
}

fn keys(map: &Mapping) -> Vec<String> {
    map.keys().cloned().collect()
}
