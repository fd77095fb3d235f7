use std::io::Cursor;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let frame = decode_frame(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!(frame.width, 1);
    assert_eq!(frame.height, 1);
    assert_eq!(
        frame.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
    assert_eq!(frame.natural_size(), Size::new(1.0, 1.0));
}

#[test]
fn decode_reports_natural_size_of_wide_frame() {
    let img = image::RgbaImage::from_pixel(16, 9, image::Rgba([10, 20, 30, 255]));
    let frame = decode_frame(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!((frame.width, frame.height), (16, 9));
    assert_eq!(frame.rgba8_premul.len(), 16 * 9 * 4);
    assert_eq!(&frame.rgba8_premul[..4], &[10, 20, 30, 255]);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_frame(b"definitely not an image").is_err());
}

#[test]
fn transparent_pixels_zero_their_color() {
    let mut px = vec![200u8, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
