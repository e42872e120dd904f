use image::{Rgb, RgbImage};

pub trait FillPixels {
    /// Fills the inclusive region `[x_min, x_max] x [y_min, y_max]`. The region must lie within the image.
    fn fill_pixels(&mut self, x_min: u32, y_min: u32, x_max: u32, y_max: u32, color: Rgb<u8>);
}

impl FillPixels for RgbImage {
    fn fill_pixels(&mut self, x_min: u32, y_min: u32, x_max: u32, y_max: u32, color: Rgb<u8>) {
        for y_iter in y_min..=y_max {
            for x_iter in x_min..=x_max {
                self.put_pixel(x_iter, y_iter, color);
            }
        }
    }
}
