use super::*;

#[test]
fn linear_tween_hits_midpoint_and_end() {
    let mut tw = Tween::new(0.0, 100.0, 2.0, Ease::Linear);
    assert_eq!(tw.value(), 0.0);
    assert_eq!(tw.tick(1.0), 50.0);
    assert!(!tw.is_done());
    assert_eq!(tw.tick(5.0), 100.0);
    assert!(tw.is_done());
}

#[test]
fn zero_duration_is_immediately_done() {
    let tw = Tween::new(3.0, 7.0, 0.0, Ease::Power2Out);
    assert!(tw.is_done());
    assert_eq!(tw.value(), 7.0);
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut tw = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
    tw.tick(0.5);
    assert_eq!(tw.tick(-1.0), 0.5);
}
