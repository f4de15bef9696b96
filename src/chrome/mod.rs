//! Page chrome that is independent of the frame timeline.

pub(crate) mod carousel;
pub(crate) mod scrollbar;
