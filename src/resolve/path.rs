//! Dotted path syntax.
//!
//! A path is split on `.`; each piece is either a plain key or `key@selector`,
//! where the selector is a list index (`2`) or a slice (`2:4`, `:3`, `3:-1`).

use crate::error::{DotcatError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Key(&'a str),
    /// `key@selector`. The selector text is validated when the segment is
    /// applied, after `key` itself has been found.
    Indexed { key: &'a str, selector: &'a str },
}

impl<'a> Segment<'a> {
    pub fn parse(piece: &'a str) -> Self {
        match piece.split_once('@') {
            Some((key, selector)) => Segment::Indexed { key, selector },
            None => Segment::Key(piece),
        }
    }
}

pub fn parse_path(path: &str) -> Vec<Segment<'_>> {
    path.split('.').map(Segment::parse).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Index(i64),
    Slice { start: Option<i64>, end: Option<i64> },
}

impl Selector {
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || DotcatError::InvalidIndex(text.to_string());
        let bound = |part: &str| -> Result<Option<i64>> {
            let part = part.trim();
            if part.is_empty() {
                Ok(None)
            } else {
                part.parse().map(Some).map_err(|_| invalid())
            }
        };

        match text.split_once(':') {
            Some((start, end)) => Ok(Selector::Slice { start: bound(start)?, end: bound(end)? }),
            None => text.trim().parse().map(Selector::Index).map_err(|_| invalid()),
        }
    }
}

/// Resolve slice bounds against a sequence length: negative bounds count
/// from the end and everything is clamped to `0..=len`.
pub fn slice_range(start: Option<i64>, end: Option<i64>, len: usize) -> std::ops::Range<usize> {
    let clamp = |bound: i64| -> usize {
        let len = len as i64;
        let absolute = if bound < 0 { bound + len } else { bound };
        absolute.clamp(0, len) as usize
    };
    let start = start.map_or(0, clamp);
    let end = end.map_or(len, clamp);
    start..end.max(start)
}
