use std::io::Cursor;

use super::*;
use crate::assets::catalog::PathTemplate;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 0, 0, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn catalog(n: u32) -> FrameCatalog {
    FrameCatalog::from_template(n, &PathTemplate::new("frame", ".png")).unwrap()
}

#[test]
fn every_slot_resolves_and_failures_are_isolated() {
    let bytes = png(8, 4);
    let source = move |loc: &str| -> ReelResult<Vec<u8>> {
        if loc == "frame002.png" {
            Err(ReelError::asset("404"))
        } else if loc == "frame003.png" {
            Ok(b"corrupt".to_vec())
        } else {
            Ok(bytes.clone())
        }
    };
    let mut pre = Preloader::start(&catalog(6), Arc::new(source), PreloadOpts::default()).unwrap();

    let report = pre.wait_all().unwrap();
    assert_eq!(report, PreloadReport { loaded: 4, failed: 2 });

    let seq = pre.sequence();
    assert_eq!(seq.state(FrameIndex(2)), SlotState::Failed);
    assert_eq!(seq.state(FrameIndex(3)), SlotState::Failed);
    assert!(seq.image(FrameIndex(3)).is_none());
    assert_eq!(
        seq.slot(FrameIndex(0)).unwrap().natural_size(),
        Some((8, 4))
    );

    let mut events = pre.poll();
    assert_eq!(events.len(), 6);
    events.sort_by_key(|e| e.index);
    assert_eq!(
        events[2],
        LoadEvent {
            index: FrameIndex(2),
            state: SlotState::Failed
        }
    );
    assert!(pre.poll().is_empty());
}

#[test]
fn wait_for_single_slot() {
    let bytes = png(2, 2);
    let source = move |_: &str| -> ReelResult<Vec<u8>> { Ok(bytes.clone()) };
    let opts = PreloadOpts { threads: Some(2) };
    let mut pre = Preloader::start(&catalog(16), Arc::new(source), opts).unwrap();
    assert_eq!(pre.wait_for(FrameIndex(0)).unwrap(), SlotState::Loaded);
    assert_eq!(pre.wait_for(FrameIndex(99)).unwrap(), SlotState::Failed);
    pre.wait_all().unwrap();
    assert_eq!(pre.poll().len(), 16);
}

#[test]
fn zero_threads_is_rejected() {
    let source = |_: &str| -> ReelResult<Vec<u8>> { Ok(Vec::new()) };
    let opts = PreloadOpts { threads: Some(0) };
    assert!(Preloader::start(&catalog(1), Arc::new(source), opts).is_err());
}
