//! Request parameter parsing shared by the menu handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use std::convert::Infallible;

/// The `nested` query flag.
///
/// Absent means `false`. Values follow host boolean sanitizing: `"false"`
/// (any case), `""`, and `"0"` are false, anything else is true. When the
/// parameter repeats, the last occurrence wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nested(pub bool);

impl<S> FromRequestParts<S> for Nested
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let nested = pairs
            .iter()
            .rev()
            .find(|(key, _)| key == "nested")
            .is_some_and(|(_, value)| sanitize_boolean(value));

        Ok(Self(nested))
    }
}

/// Host boolean sanitizing for string input.
pub fn sanitize_boolean(value: &str) -> bool {
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// A parsed `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIdSegment {
    Id(u64),
    /// All digits, but past `u64::MAX`. No stored menu can have this id.
    OutOfRange,
    /// Not `[0-9]+`, so no route matches.
    Invalid,
}

/// Parse a menu id path segment (`[0-9]+`).
pub fn parse_menu_id(segment: &str) -> MenuIdSegment {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit()) {
        return MenuIdSegment::Invalid;
    }
    match segment.parse() {
        Ok(id) => MenuIdSegment::Id(id),
        Err(_) => MenuIdSegment::OutOfRange,
    }
}
