//! Route handlers. Each one is a thin call into `ScriptureService` that
//! wraps the result in the response envelope clients expect.

pub mod books;
pub mod health;
pub mod search;
pub mod verses;
pub mod versions;

/// Parse a numeric path segment. Anything that is not an integer maps to 0,
/// which the resolver rejects as out of range after the book has been
/// checked.
pub(crate) fn parse_segment(segment: &str) -> i64 {
    segment.parse().unwrap_or(0)
}
