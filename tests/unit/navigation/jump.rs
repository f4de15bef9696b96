use super::*;

fn section(id: &str, anim: &str, start: &str) -> SectionMarkup {
    SectionMarkup {
        id: id.to_string(),
        anim: anim.to_string(),
        start: start.to_string(),
    }
}

fn navigator() -> Navigator {
    Navigator::new(
        &[
            section("about", "3", "40"),
            section("intro", "1", "0"),
            section("broken", "2", "later"),
            section("far", "9", "0"),
        ],
        vec![
            "#intro".to_string(),
            "#about".to_string(),
            "#contact".to_string(),
        ],
        500,
        1.2,
    )
}

fn table() -> SegmentTable {
    SegmentTable::from_frame_counts(vec![100, 150, 200, 120]).unwrap()
}

#[test]
fn jump_concatenates_prior_segments() {
    let mut nav = navigator();
    let plan = nav.plan_jump("#about", &table(), 5700.0).unwrap();
    assert_eq!(plan.global_frame, 290.0);
    assert_eq!(plan.scroll_offset, 2900.0);
    assert_eq!(plan.target_id, "about");
    assert_eq!(plan.duration_secs, 1.2);
    assert_eq!(plan.ease, Ease::Power2Out);
    assert_eq!(nav.clicked_frame(), Some(290.0));
}

#[test]
fn missing_or_broken_targets_are_no_ops() {
    let mut nav = navigator();
    assert!(nav.plan_jump("#nowhere", &table(), 5700.0).is_none());
    assert_eq!(nav.clicked_frame(), None);
    assert!(nav.plan_jump("#broken", &table(), 5700.0).is_none());
    assert!(nav.clicked_frame().unwrap().is_nan());
    assert!(nav.plan_jump("#far", &table(), 5700.0).is_none());
}

#[test]
fn completion_sets_fragment_and_single_active_link() {
    let mut nav = navigator();
    let plan = nav.plan_jump("#about", &table(), 5700.0).unwrap();
    let done = nav.complete_jump(&plan);
    assert_eq!(done.fragment, "#about");
    assert_eq!(done.active_links, vec!["#about".to_string()]);
    assert_eq!(nav.fragment(), Some("#about"));

    let plan = nav.plan_jump("#intro", &table(), 5700.0).unwrap();
    nav.complete_jump(&plan);
    assert_eq!(nav.active_links(), vec!["#intro".to_string()]);
}

#[test]
fn scrolling_past_hysteresis_clears_active_links() {
    let mut nav = navigator();
    let plan = nav.plan_jump("#about", &table(), 5700.0).unwrap();
    nav.complete_jump(&plan);

    assert!(!nav.on_scroll(FrameIndex(790)));
    assert_eq!(nav.active_links().len(), 1);
    assert!(nav.on_scroll(FrameIndex(791)));
    assert!(nav.active_links().is_empty());
    assert!(!nav.on_scroll(FrameIndex(900)));
}

#[test]
fn nan_clicked_frame_never_clears() {
    let mut nav = navigator();
    let plan = nav.plan_jump("#about", &table(), 5700.0).unwrap();
    nav.complete_jump(&plan);
    let _ = nav.plan_jump("#broken", &table(), 5700.0);
    assert!(!nav.on_scroll(FrameIndex(100_000)));
    assert_eq!(nav.active_links().len(), 1);
}

#[test]
fn menu_toggles_and_closes_on_jump() {
    let mut nav = navigator();
    assert!(nav.toggle_menu());
    assert!(nav.menu_open());
    nav.plan_jump("#intro", &table(), 5700.0).unwrap();
    assert!(!nav.menu_open());
    assert!(nav.toggle_menu());
    assert!(!nav.toggle_menu());
}

#[test]
fn jump_tween_lands_on_offset() {
    let mut nav = navigator();
    let plan = nav.plan_jump("#about", &table(), 5700.0).unwrap();
    let mut tw = plan.tween(0.0);
    assert_eq!(tw.tick(1.2), 2900.0);
}

#[test]
fn section_attributes_must_be_whole_numbers() {
    let mut nav = Navigator::new(
        &[
            section("suffixed", "3", "40px"),
            section("blank", "3", ""),
            section("spaced", " 3 ", " 40 "),
        ],
        vec![],
        500,
        1.2,
    );
    assert!(nav.plan_jump("#suffixed", &table(), 5700.0).is_none());
    assert!(nav.clicked_frame().unwrap().is_nan());
    assert_eq!(
        nav.plan_jump("#blank", &table(), 5700.0).unwrap().global_frame,
        250.0
    );
    assert_eq!(
        nav.plan_jump("#spaced", &table(), 5700.0).unwrap().global_frame,
        290.0
    );
}

#[test]
fn section_without_segment_counts_from_timeline_start() {
    let mut nav = Navigator::new(
        &[
            section("zero", "0", "40"),
            section("word", "three", "40"),
            section("last", "4", "0"),
        ],
        vec![],
        500,
        1.2,
    );
    let plan = nav.plan_jump("#zero", &table(), 5700.0).unwrap();
    assert_eq!(plan.global_frame, 40.0);
    assert_eq!(plan.scroll_offset, 400.0);
    assert_eq!(nav.clicked_frame(), Some(40.0));
    assert_eq!(
        nav.plan_jump("#word", &table(), 5700.0).unwrap().global_frame,
        40.0
    );
    assert_eq!(
        nav.plan_jump("#last", &table(), 5700.0).unwrap().global_frame,
        450.0
    );
}
