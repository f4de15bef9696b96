use super::*;

#[test]
fn remembers_last_frame_per_segment() {
    let mut p = StillPlayer::new(2);
    assert_eq!(p.frame_of(SegmentIndex(0)), None);
    p.go_to_and_stop(SegmentPosition {
        segment: SegmentIndex(1),
        local: FrameIndex(7),
    });
    p.go_to_and_stop(SegmentPosition {
        segment: SegmentIndex(1),
        local: FrameIndex(9),
    });
    assert_eq!(p.frame_of(SegmentIndex(1)), Some(FrameIndex(9)));
    assert_eq!(p.seeks(), 2);
}

#[test]
fn grows_for_unexpected_segments() {
    let mut p = StillPlayer::new(0);
    p.go_to_and_stop(SegmentPosition {
        segment: SegmentIndex(3),
        local: FrameIndex(1),
    });
    assert_eq!(p.frame_of(SegmentIndex(3)), Some(FrameIndex(1)));
}
