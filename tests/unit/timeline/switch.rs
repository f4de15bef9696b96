use super::*;

fn shown_count(s: &ActiveSegmentSwitch) -> usize {
    s.shown().iter().filter(|&&v| v).count()
}

#[test]
fn starts_with_first_segment_shown() {
    let s = ActiveSegmentSwitch::new(4);
    assert_eq!(s.current(), SegmentIndex(0));
    assert_eq!(s.shown(), &[true, false, false, false]);
    assert_eq!(s.mutation_count(), 0);
}

#[test]
fn switching_keeps_exactly_one_shown() {
    let mut s = ActiveSegmentSwitch::new(4);
    let sw = s.switch_to(SegmentIndex(2)).unwrap();
    assert_eq!(
        sw,
        SegmentSwitch {
            from: SegmentIndex(0),
            to: SegmentIndex(2)
        }
    );
    assert_eq!(s.shown(), &[false, false, true, false]);
    assert_eq!(shown_count(&s), 1);
}

#[test]
fn repeated_switch_is_idempotent() {
    let mut s = ActiveSegmentSwitch::new(4);
    assert!(s.switch_to(SegmentIndex(1)).is_some());
    let before = s.shown().to_vec();
    assert!(s.switch_to(SegmentIndex(1)).is_none());
    assert_eq!(s.shown(), before.as_slice());
    assert_eq!(s.mutation_count(), 1);
}

#[test]
fn unknown_segment_is_ignored() {
    let mut s = ActiveSegmentSwitch::new(2);
    assert!(s.switch_to(SegmentIndex(5)).is_none());
    assert_eq!(s.current(), SegmentIndex(0));
}
