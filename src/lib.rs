//! scrollreel drives scroll-synchronized playback of concatenated vector animations.
//!
//! A page is a list of independently loaded animation segments played back to back, with
//! text overlays and navigation sections pinned to frame ranges inside those segments. The
//! engine owns every decision the page makes and reports it as plain data; drawing stays
//! with the host.
//!
//! # Pipeline overview
//!
//! 1. **Load**: segment sources are fetched in parallel and joined into a [`SegmentTable`]
//!    ([`preload`]). Nothing maps before every segment has loaded.
//! 2. **Map**: scroll offset -> progress -> global frame ([`ScrollMetrics`],
//!    [`frame_for_progress`]), optionally smoothed by a [`Scrub`].
//! 3. **Resolve**: global frame -> segment and local frame ([`SegmentTable::resolve`]).
//! 4. **Apply**: show exactly one segment ([`ActiveSegmentSwitch`]), seek the
//!    [`SegmentPlayer`], gate text overlays ([`VisibilityGate`]).
//!
//! [`ScrollSession`] wires these steps behind a single `on_scroll` entry point and also
//! drives navigation jumps, the preview panel, the custom scrollbar and the carousels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod chrome;
mod config;
mod foundation;
mod loader;
mod navigation;
mod overlay;
mod preview;
mod session;
mod timeline;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use chrome::carousel::{Carousel, ResponsiveImage, Testimonial};
pub use chrome::scrollbar::{ScrollHint, Scrollbar, Thumb, Viewport};
pub use config::manifest::{ReelManifest, Tuning};
pub use foundation::core::{FrameIndex, FrameRange, Point, Rect, SegmentIndex, SegmentPosition};
pub use foundation::error::{ReelError, ReelResult};
pub use loader::lottie::LottieHeader;
pub use loader::preload::{
    FsSegmentSource, LoadProgress, LoadedSegment, Preloaded, SegmentSource, preload,
};
pub use loader::reveal::{Reveal, RevealPhase, RevealState};
pub use navigation::jump::{JumpCompletion, JumpPlan, NavTarget, Navigator, SectionMarkup};
pub use overlay::gate::{OverlayMarkup, OverlayState, TextOverlay, VisibilityGate};
pub use preview::panel::{PreviewPanel, PreviewPose};
pub use session::player::{SegmentPlayer, StillPlayer};
pub use session::scroll_session::{FrameUpdate, ScrollSession, ScrollUpdate, TickUpdate};
pub use timeline::mapper::{
    FrameStep, ScrollMapper, ScrollMetrics, frame_for_progress, scroll_offset_for_frame,
};
pub use timeline::scrub::Scrub;
pub use timeline::segments::SegmentTable;
pub use timeline::switch::{ActiveSegmentSwitch, SegmentSwitch};
