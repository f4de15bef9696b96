//! Scroll position to frame mapping over the concatenated segments.

pub(crate) mod mapper;
pub(crate) mod scrub;
pub(crate) mod segments;
pub(crate) mod switch;
