/*!
 * Router
 * Maps request paths onto routes
 */

use crate::core::limits::ENTITY_ROUTE_PREFIX;
use std::borrow::Cow;

/// Known routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/entity/{count}`; `count` is one non-empty, percent-decoded path segment
    Entity { count: Cow<'a, str> },
}

/// Match a request path
///
/// Segments are split on the encoded path, then decoded. A segment that does
/// not decode to UTF-8 is passed through as-is and fails count parsing later.
pub fn route(path: &str) -> Option<Route<'_>> {
    let segment = path.strip_prefix(ENTITY_ROUTE_PREFIX)?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    let count = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));
    Some(Route::Entity { count })
}
