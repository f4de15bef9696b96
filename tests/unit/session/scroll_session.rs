use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::core::SegmentIndex,
    navigation::jump::SectionMarkup,
    overlay::gate::OverlayMarkup,
};

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<SegmentPosition>>>);

impl SegmentPlayer for Recorder {
    fn go_to_and_stop(&mut self, position: SegmentPosition) {
        self.0.borrow_mut().push(position);
    }
}

fn manifest(scrub_secs: f64) -> ReelManifest {
    let mut m: ReelManifest = serde_json::from_str(
        r##"{
            "segments": ["a.json", "b.json", "c.json", "d.json"],
            "overlays": [
                {"id": "hello", "anim": "1", "start": "10", "end": "20"},
                {"id": "about-copy", "anim": "3", "start": "0", "end": "60"}
            ],
            "sections": [{"id": "about", "anim": "3", "start": "40"}],
            "links": ["#about", "#work"],
            "testimonials": [
                {"name": "A", "text": "a"},
                {"name": "B", "text": "b"}
            ]
        }"##,
    )
    .unwrap();
    m.tuning.scrub_secs = scrub_secs;
    m
}

fn session_with(m: &ReelManifest) -> (ScrollSession, Recorder) {
    let rec = Recorder::default();
    let table = SegmentTable::from_frame_counts(vec![100, 150, 200, 120]).unwrap();
    let s = ScrollSession::new(m, table, Box::new(rec.clone())).unwrap();
    (s, rec)
}

fn session(scrub_secs: f64) -> (ScrollSession, Recorder) {
    session_with(&manifest(scrub_secs))
}

fn viewport(scroll_top: f64) -> Viewport {
    // max_scroll = 5690: ten pixels per frame of the 0..=569 counter.
    Viewport {
        scroll_top,
        scroll_height: 6490.0,
        client_height: 800.0,
    }
}

#[test]
fn unscrubbed_scroll_maps_straight_to_frames() {
    let (mut s, rec) = session(0.0);
    let up = s.on_scroll(&viewport(2500.0));
    let frame = up.frame.unwrap();
    assert_eq!(frame.global, FrameIndex(250));
    assert_eq!(
        frame.position,
        SegmentPosition {
            segment: SegmentIndex(2),
            local: FrameIndex(0)
        }
    );
    assert_eq!(frame.switched.unwrap().to, SegmentIndex(2));
    assert_eq!(frame.overlays.len(), 1);
    assert!(frame.overlays[0].visible);
    assert_eq!(rec.0.borrow().last(), Some(&frame.position));
    assert_eq!(s.switch().shown(), &[false, false, true, false]);
}

#[test]
fn bottom_of_page_is_last_frame_of_last_segment() {
    let (mut s, _) = session(0.0);
    let frame = s.on_scroll(&viewport(5690.0)).frame.unwrap();
    assert_eq!(frame.global, FrameIndex(569));
    assert_eq!(frame.position.segment, SegmentIndex(3));
    assert_eq!(frame.position.local, FrameIndex(119));
}

#[test]
fn same_scroll_twice_is_idempotent() {
    let (mut s, _) = session(0.0);
    let first = s.on_scroll(&viewport(150.0)).frame.unwrap();
    let second = s.on_scroll(&viewport(150.0)).frame.unwrap();
    assert!(first.frame_changed);
    assert!(!second.frame_changed);
    assert!(second.switched.is_none());
    assert_eq!(first.overlays[0].visible, second.overlays[0].visible);
    assert!(second.overlays.iter().all(|o| !o.changed));
    assert_eq!(s.switch().mutation_count(), 0);
}

#[test]
fn scrubbed_scroll_applies_frames_on_tick() {
    let (mut s, rec) = session(1.0);
    let up = s.on_scroll(&viewport(5690.0));
    assert!(up.frame.is_none());
    assert!(rec.0.borrow().is_empty());

    let mid = s.tick(0.5).frame.unwrap();
    assert!(mid.global.0 > 0 && mid.global.0 < 569);
    let end = s.tick(0.5).frame.unwrap();
    assert_eq!(end.global, FrameIndex(569));
    assert!(s.tick(0.5).frame.is_none());
}

#[test]
fn navigation_jump_uses_last_viewport() {
    let mut m = manifest(0.0);
    m.tuning.nav_hysteresis_frames = 100;
    let (mut s, _) = session_with(&m);
    s.on_scroll(&viewport(0.0));
    let plan = s.plan_jump("#about").unwrap();
    assert_eq!(plan.global_frame, 290.0);
    assert!((plan.scroll_offset - 290.0 / 570.0 * 5690.0).abs() < 1e-9);

    let done = s.complete_jump(&plan);
    assert_eq!(done.active_links, vec!["#about".to_string()]);

    assert!(!s.on_scroll(&viewport(plan.scroll_offset)).links_cleared);
    let far = viewport(5690.0);
    assert!(s.on_scroll(&far).links_cleared);
    assert!(s.navigator().active_links().is_empty());
}

#[test]
fn preview_and_thumb_follow_scroll() {
    let (mut s, _) = session(0.0);
    let up = s.on_scroll(&viewport(0.0));
    assert_eq!(up.preview.opacity, 0.0);
    assert_eq!(up.thumb.top, 0.0);
    assert_eq!(up.hint.opacity, 1.0);
}

#[test]
fn tick_drives_testimonial_autoplay() {
    let (mut s, _) = session(0.0);
    assert_eq!(s.tick(3.0).testimonials_slide, Some(1));
    assert_eq!(s.tick(3.0).projects_slide, None);
    assert_eq!(s.testimonials_mut().slides_per_view(1024), 3);
}

#[test]
fn seek_bypasses_scrub() {
    let (mut s, _) = session(1.0);
    let f = s.seek(1.0);
    assert_eq!(f.global, FrameIndex(569));
    assert!(s.tick(0.1).frame.is_none());
}

#[test]
fn overlay_markup_for_unknown_segment_is_inert() {
    let mut m = manifest(0.0);
    m.overlays.push(OverlayMarkup {
        id: "ghost".to_string(),
        anim: "7".to_string(),
        start: "0".to_string(),
        end: "999".to_string(),
    });
    m.sections.push(SectionMarkup {
        id: "ghost-section".to_string(),
        anim: "7".to_string(),
        start: "0".to_string(),
    });
    let (mut s, _) = session_with(&m);
    s.on_scroll(&viewport(5690.0));
    assert!(s.gate().visible_ids().all(|id| id != "ghost"));
    assert!(s.plan_jump("#ghost-section").is_none());
}

#[test]
fn project_sources_switch_at_mobile_breakpoint() {
    let mut m = manifest(0.0);
    m.projects = vec![
        ResponsiveImage {
            mobile: "p1-m.webp".to_string(),
            desktop: "p1.webp".to_string(),
        },
        ResponsiveImage {
            mobile: "p2-m.webp".to_string(),
            desktop: "p2.webp".to_string(),
        },
    ];
    let (s, _) = session_with(&m);
    assert_eq!(s.project_sources(768), vec!["p1-m.webp", "p2-m.webp"]);
    assert_eq!(s.project_sources(769), vec!["p1.webp", "p2.webp"]);

    m.tuning.mobile_max_width_px = 1024;
    let (s, _) = session_with(&m);
    assert_eq!(s.project_sources(900), vec!["p1-m.webp", "p2-m.webp"]);
}
