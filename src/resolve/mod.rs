//! Dotted path lookup over a parsed [`Value`] tree.

use crate::error::{DotcatError, Result};
use crate::value::Value;
use std::borrow::Cow;

pub mod complete;
pub mod path;

pub use complete::dotted_path_completions;
pub use path::{parse_path, Segment, Selector};

/// Walk `root` along a dotted path such as `dependencies.go` or
/// `contributors@0.name`.
///
/// The result borrows from `root` unless a slice selector (`key@1:3`) built a
/// new sequence along the way.
pub fn from_dotted_path<'a>(root: &'a Value, path: &str) -> Result<Cow<'a, Value>> {
    if path.trim().is_empty() {
        return Err(DotcatError::EmptyPath);
    }

    let mut current = Cow::Borrowed(root);
    for segment in parse_path(path) {
        current = match current {
            Cow::Borrowed(value) => apply_segment(value, segment)?,
            Cow::Owned(value) => Cow::Owned(apply_segment(&value, segment)?.into_owned()),
        };
    }

    tracing::debug!("Resolved '{}' to a {}", path, current.kind());
    Ok(current)
}

fn apply_segment<'a>(current: &'a Value, segment: Segment<'_>) -> Result<Cow<'a, Value>> {
    match segment {
        Segment::Key(key) => lookup_key(current, key).map(Cow::Borrowed),
        Segment::Indexed { key, selector } => {
            let found = lookup_key(current, key)?;
            let items =
                found.as_sequence().ok_or_else(|| DotcatError::NotASequence(key.to_string()))?;
            select(items, Selector::parse(selector)?)
        }
    }
}

fn lookup_key<'a>(current: &'a Value, key: &str) -> Result<&'a Value> {
    let map = current.as_mapping().ok_or_else(|| DotcatError::NotAMapping(key.to_string()))?;
    map.get(key).ok_or_else(|| DotcatError::KeyNotFound(key.to_string()))
}

fn select(items: &[Value], selector: Selector) -> Result<Cow<'_, Value>> {
    match selector {
        Selector::Index(index) => usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .map(Cow::Borrowed)
            .ok_or(DotcatError::IndexOutOfBounds { index, len: items.len() }),
        Selector::Slice { start, end } => {
            let range = path::slice_range(start, end, items.len());
            Ok(Cow::Owned(Value::Sequence(items[range].to_vec())))
        }
    }
}
