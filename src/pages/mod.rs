//! Routed pages.


pub mod home;
pub mod login;
pub mod peer_review;
pub mod supervisors;

/// Parse a positive numeric route segment.
#[must_use]
pub fn parse_route_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
