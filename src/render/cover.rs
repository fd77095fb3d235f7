use crate::foundation::core::{Affine, Rect, Size};

/// Placement of an image on a surface with CSS `object-fit: cover` semantics.
///
/// The rectangle is at least as large as the surface on both axes and centered, so the
/// overflowing axis is cropped symmetrically and nothing is letterboxed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverRect {
    /// Drawn image width in surface pixels.
    pub draw_width: f64,
    /// Drawn image height in surface pixels.
    pub draw_height: f64,
    /// Left edge relative to the surface (zero or negative).
    pub offset_x: f64,
    /// Top edge relative to the surface (zero or negative).
    pub offset_y: f64,
}

impl CoverRect {
    /// Destination rectangle in surface space.
    pub fn rect(self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.offset_x + self.draw_width,
            self.offset_y + self.draw_height,
        )
    }

    /// Transform mapping image pixel space `[0, w] x [0, h]` onto this rectangle.
    pub fn image_transform(self, image: Size) -> Affine {
        Affine::translate((self.offset_x, self.offset_y))
            * Affine::scale_non_uniform(
                self.draw_width / image.width,
                self.draw_height / image.height,
            )
    }
}

/// Compute the cover placement of `image` on `surface`.
///
/// Returns `None` when either size is empty or non-finite; there is nothing meaningful to draw.
pub fn cover_rect(surface: Size, image: Size) -> Option<CoverRect> {
    let valid = |s: Size| s.is_finite() && s.width > 0.0 && s.height > 0.0;
    if !valid(surface) || !valid(image) {
        return None;
    }

    let surface_ratio = surface.width / surface.height;
    let image_ratio = image.width / image.height;

    let out = if surface_ratio > image_ratio {
        let draw_width = surface.width;
        let draw_height = draw_width / image_ratio;
        CoverRect {
            draw_width,
            draw_height,
            offset_x: 0.0,
            offset_y: (surface.height - draw_height) / 2.0,
        }
    } else {
        let draw_height = surface.height;
        let draw_width = draw_height * image_ratio;
        CoverRect {
            draw_width,
            draw_height,
            offset_x: (surface.width - draw_width) / 2.0,
            offset_y: 0.0,
        }
    };
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cover.rs"]
mod tests;
