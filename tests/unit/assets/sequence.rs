use super::*;
use crate::assets::catalog::PathTemplate;

fn seq(n: u32) -> FrameSequence {
    let cat = FrameCatalog::from_template(n, &PathTemplate::new("frame", ".png")).unwrap();
    FrameSequence::new(&cat)
}

fn img(w: u32, h: u32) -> FrameImage {
    FrameImage {
        width: w,
        height: h,
        rgba8_premul: Arc::new(vec![0u8; (w * h * 4) as usize]),
    }
}

#[test]
fn slots_start_pending_with_catalog_locations() {
    let s = seq(4);
    assert_eq!(s.count().get(), 4);
    assert_eq!(s.tally(), (4, 0, 0));
    assert!(!s.is_settled());
    let slot = s.slot(FrameIndex(2)).unwrap();
    assert_eq!(slot.index(), FrameIndex(2));
    assert_eq!(slot.location(), "frame002.png");
    assert_eq!(slot.state(), SlotState::Pending);
    assert!(slot.image().is_none());
    assert!(slot.natural_size().is_none());
}

#[test]
fn slots_resolve_exactly_once() {
    let s = seq(2);
    assert!(s.mark_loaded(FrameIndex(0), img(4, 3)));
    assert!(!s.mark_failed(FrameIndex(0), "late failure"));
    assert_eq!(s.state(FrameIndex(0)), SlotState::Loaded);
    assert_eq!(s.slot(FrameIndex(0)).unwrap().natural_size(), Some((4, 3)));

    assert!(s.mark_failed(FrameIndex(1), "404"));
    assert!(!s.mark_loaded(FrameIndex(1), img(1, 1)));
    assert_eq!(s.state(FrameIndex(1)), SlotState::Failed);
    assert!(s.image(FrameIndex(1)).is_none());
    assert_eq!(s.slot(FrameIndex(1)).unwrap().failure(), Some("404"));

    assert_eq!(s.tally(), (0, 1, 1));
    assert!(s.is_settled());
}

#[test]
fn out_of_range_reads_as_failed_and_cannot_be_written() {
    let s = seq(1);
    assert_eq!(s.state(FrameIndex(5)), SlotState::Failed);
    assert!(!s.mark_loaded(FrameIndex(5), img(1, 1)));
}

#[test]
fn concurrent_writers_resolve_each_slot_once() {
    let s = Arc::new(seq(8));
    let wins: u32 = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = Arc::clone(&s);
                scope.spawn(move || {
                    (0..8)
                        .filter(|&i| s.mark_loaded(FrameIndex(i), img(1, 1)))
                        .count() as u32
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    assert_eq!(wins, 8);
    assert_eq!(s.tally(), (0, 8, 0));
}
