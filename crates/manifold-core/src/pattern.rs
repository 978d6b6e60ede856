//! Path pattern matching with named token capture.
//!
//! Patterns are `/`-separated segment lists supporting:
//! - literal segments, matched verbatim;
//! - `*`, consuming exactly one path segment;
//! - `**`, consuming zero or more path segments (leftmost-shortest);
//! - `{name}`, consuming exactly one path segment and binding it to `name`.

use std::collections::BTreeMap;

/// Tokens captured by a successful match, keyed by capture name.
///
/// A sorted map keeps substitution order reproducible when a bound value
/// itself contains a placeholder.
pub type TokenBindings = BTreeMap<String, String>;

/// One parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim segment.
    Literal(String),
    /// `*`: exactly one path segment.
    Wildcard,
    /// `**`: zero or more path segments.
    DeepWildcard,
    /// `{name}`: exactly one path segment, bound to `name`.
    Capture(String),
}

/// A parsed, immutable path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a raw `/`-separated pattern. Empty segments are dropped, so
    /// leading, trailing, and duplicated separators are ignored.
    pub fn parse(raw: &str) -> Self {
        let segments = split_segments(raw)
            .into_iter()
            .map(|s| match s {
                "*" => Segment::Wildcard,
                "**" => Segment::DeepWildcard,
                _ if s.len() >= 2 && s.starts_with('{') && s.ends_with('}') => {
                    Segment::Capture(s[1..s.len() - 1].to_string())
                }
                _ => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a raw path, returning captured tokens on success.
    pub fn matches(&self, path: &str) -> Option<TokenBindings> {
        self.match_segments(&split_segments(path))
    }

    /// Match an already-segmented path.
    pub fn match_segments(&self, path: &[&str]) -> Option<TokenBindings> {
        match_and_extract_tokens(&self.segments, path)
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Split a raw path into segments, dropping empty ones.
pub fn split_segments(raw: &str) -> Vec<&str> {
    raw.split('/').filter(|s| !s.is_empty()).collect()
}

/// Recursive matcher, head-first over both sequences.
///
/// Bindings from a failed branch are discarded wholesale; a capture inserts
/// its value only after the remainder has matched, so an outer duplicate
/// capture overwrites the inner one. A `**` first tries to end here, then
/// grows by one segment, which makes every ambiguous pattern resolve
/// deterministically: a trailing `**` may consume zero segments, an interior
/// one consumes at least one.
fn match_and_extract_tokens(pattern: &[Segment], path: &[&str]) -> Option<TokenBindings> {
    let Some((head, pattern_rest)) = pattern.split_first() else {
        // Pattern exhausted: match only if the path is too.
        return path.is_empty().then(TokenBindings::new);
    };
    if path.is_empty() {
        // A trailing `**` may still consume zero segments.
        return match head {
            Segment::DeepWildcard => match_and_extract_tokens(pattern_rest, path),
            _ => None,
        };
    }
    match head {
        Segment::Literal(lit) => {
            if lit == path[0] {
                match_and_extract_tokens(pattern_rest, &path[1..])
            } else {
                None
            }
        }
        Segment::Wildcard => match_and_extract_tokens(pattern_rest, &path[1..]),
        Segment::Capture(name) => {
            let mut bindings = match_and_extract_tokens(pattern_rest, &path[1..])?;
            bindings.insert(name.clone(), path[0].to_string());
            Some(bindings)
        }
        Segment::DeepWildcard => match_and_extract_tokens(pattern_rest, &path[1..])
            .or_else(|| match_and_extract_tokens(pattern, &path[1..])),
    }
}
