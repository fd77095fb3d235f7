use super::*;

#[test]
fn idle_scheduler_has_nothing_due() {
    let mut s = RenderScheduler::new();
    assert!(!s.is_pending());
    assert_eq!(s.take_due(), None);
    assert!(!s.invalidate());
    assert_eq!(s.take_due(), None);
}

#[test]
fn observations_coalesce_into_one_paint_with_latest_index() {
    let mut s = RenderScheduler::new();
    assert!(s.observe(FrameIndex(3)));
    assert!(!s.observe(FrameIndex(4)));
    assert!(!s.observe(FrameIndex(9)));
    assert!(s.is_pending());

    assert_eq!(s.take_due(), Some(FrameIndex(9)));
    s.mark_rendered(FrameIndex(9));
    assert_eq!(s.take_due(), None);
    assert_eq!(s.last_rendered(), Some(FrameIndex(9)));
}

#[test]
fn unchanged_index_never_requests_paint() {
    let mut s = RenderScheduler::new();
    s.observe(FrameIndex(5));
    let due = s.take_due().unwrap();
    s.mark_rendered(due);

    for _ in 0..10 {
        assert!(!s.observe(FrameIndex(5)));
    }
    assert!(!s.is_pending());
    assert_eq!(s.take_due(), None);
}

#[test]
fn scrolling_back_before_paint_cancels_the_draw() {
    let mut s = RenderScheduler::new();
    s.observe(FrameIndex(1));
    let due = s.take_due().unwrap();
    s.mark_rendered(due);

    assert!(s.observe(FrameIndex(2)));
    assert!(!s.observe(FrameIndex(1)));
    assert_eq!(s.take_due(), None);
    assert!(!s.is_pending());
}

#[test]
fn skipped_draw_keeps_marker_until_issued() {
    let mut s = RenderScheduler::new();
    s.observe(FrameIndex(7));
    assert_eq!(s.take_due(), Some(FrameIndex(7)));
    // Frame not available: the caller does not mark it rendered.
    assert_eq!(s.last_rendered(), None);

    // A later observation of the same index asks again.
    assert!(s.observe(FrameIndex(7)));
    assert_eq!(s.take_due(), Some(FrameIndex(7)));
    s.mark_rendered(FrameIndex(7));
    assert!(!s.observe(FrameIndex(7)));
}

#[test]
fn invalidate_redraws_current_index_once() {
    let mut s = RenderScheduler::new();
    s.observe(FrameIndex(2));
    let due = s.take_due().unwrap();
    s.mark_rendered(due);

    assert!(s.invalidate());
    assert!(!s.invalidate());
    assert_eq!(s.take_due(), Some(FrameIndex(2)));
    s.mark_rendered(FrameIndex(2));
    assert_eq!(s.take_due(), None);
    assert!(!s.observe(FrameIndex(2)));
}

#[test]
fn at_most_one_draw_per_paint_callback() {
    let mut s = RenderScheduler::new();
    let mut draws = 0;
    for frame in 0..100u32 {
        // Ten scroll events per paint cycle.
        for k in 0..10u32 {
            s.observe(FrameIndex((frame * 10 + k) / 4));
        }
        if let Some(idx) = s.take_due() {
            s.mark_rendered(idx);
            draws += 1;
        }
        assert_eq!(s.take_due(), None);
    }
    assert!(draws <= 100);
    assert_eq!(s.last_rendered(), Some(FrameIndex((99 * 10 + 9) / 4)));
}
