use std::fmt;

use image::{Rgb, RgbImage};

use crate::helpers::FillPixels;

pub const MASK_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Closed rectangle `(x1, y1)-(x2, y2)` in pixel coordinates, both corners included.
///
/// Corners may be given in any order and may lie outside the image; they are only resolved
/// against a concrete image size in [`MaskRectangle::clip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskRectangle {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// Inclusive pixel bounds of a mask after clipping to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl MaskRectangle {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn clip(&self, width: u32, height: u32) -> Option<PixelRegion> {
        let (x_min, x_max) = clip_axis(self.x1, self.x2, width)?;
        let (y_min, y_max) = clip_axis(self.y1, self.y2, height)?;

        Some(PixelRegion { x_min, y_min, x_max, y_max })
    }
}

impl fmt::Display for MaskRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) to ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

fn clip_axis(start: i64, end: i64, length: u32) -> Option<(u32, u32)> {
    if length == 0 {
        return None;
    }

    let low = start.min(end).max(0);
    let high = start.max(end).min(length as i64 - 1);

    if low > high {
        None
    } else {
        Some((low as u32, high as u32))
    }
}

/// Blackens every pixel of `image` covered by `rectangle`. Returns `false` if the rectangle
/// misses the image entirely.
pub fn apply_mask(image: &mut RgbImage, rectangle: &MaskRectangle) -> bool {
    match rectangle.clip(image.width(), image.height()) {
        Some(PixelRegion { x_min, y_min, x_max, y_max }) => {
            image.fill_pixels(x_min, y_min, x_max, y_max, MASK_COLOR);
            true
        }
        None => false,
    }
}
