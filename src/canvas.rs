//! Square RGBA drawing surface.
//!
//! [`Canvas`] owns the pixels of a single render. It starts fully
//! transparent and only supports what the badge needs: filled discs that
//! replace whatever is already there, so the last shape painted wins.

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::icon::{SizePx, validate_size};

/// A transparent `size × size` RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a fully transparent canvas.
    ///
    /// Fails with [`Error::InvalidSize`](crate::Error::InvalidSize) for a zero
    /// or oversized edge length.
    pub fn new(size: u32) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            image: RgbaImage::new(size, size),
        })
    }

    /// Returns the canvas dimensions.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.image.width(), self.image.height())
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Fills a disc of `radius` centred on `(cx, cy)` with `color`.
    ///
    /// Covered pixels are overwritten, alpha included; nothing is blended
    /// with what was painted before. A pixel is covered when its squared
    /// distance to the centre is at most `radius²`, so a radius of 0 covers
    /// only the centre pixel. Pixels that fall outside the canvas are clipped.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: u32, color: Rgba<u8>) {
        let r = radius as i64;
        let r_sq = r * r;
        let width = self.image.width() as i64;
        let height = self.image.height() as i64;

        let (cx, cy) = (cx as i64, cy as i64);
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(width - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(height - 1);

        for y in y0..=y1 {
            let dy = y - cy;
            for x in x0..=x1 {
                let dx = x - cx;
                if dx * dx + dy * dy > r_sq {
                    continue;
                }
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Borrows the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas and returns the underlying image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba<u8> = Rgba([33, 150, 243, 255]);

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8).unwrap();
        assert_eq!(canvas.dimensions(), SizePx::new(8, 8));
        assert!(canvas.as_image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(Canvas::new(0).is_err());
    }

    #[test]
    fn zero_radius_disc_covers_centre_only() {
        let mut canvas = Canvas::new(5).unwrap();
        canvas.fill_disc(2, 2, 0, BLUE);

        assert_eq!(canvas.pixel(2, 2), BLUE);
        let covered = canvas.as_image().pixels().filter(|p| p[3] > 0).count();
        assert_eq!(covered, 1);
    }

    #[test]
    fn disc_coverage_is_symmetric() {
        let mut canvas = Canvas::new(9).unwrap();
        canvas.fill_disc(4, 4, 2, BLUE);

        // Radius 2 covers the 13 lattice points with dx² + dy² <= 4.
        let covered = canvas.as_image().pixels().filter(|p| p[3] > 0).count();
        assert_eq!(covered, 13);
        assert_eq!(canvas.pixel(6, 4), BLUE);
        assert_eq!(canvas.pixel(4, 2), BLUE);
        assert_eq!(canvas.pixel(6, 6).0, [0, 0, 0, 0]);
    }

    #[test]
    fn disc_is_clipped_at_edges() {
        let mut canvas = Canvas::new(4).unwrap();
        canvas.fill_disc(0, 0, 10, BLUE);
        assert!(canvas.as_image().pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn later_disc_overwrites_earlier() {
        let mut canvas = Canvas::new(9).unwrap();
        canvas.fill_disc(4, 4, 4, BLUE);
        canvas.fill_disc(4, 4, 2, Rgba([100, 181, 246, 200]));

        assert_eq!(canvas.pixel(4, 4).0, [100, 181, 246, 200]);
        assert_eq!(canvas.pixel(6, 4).0, [100, 181, 246, 200]);
        assert_eq!(canvas.pixel(7, 4), BLUE);
    }

    #[test]
    fn transparent_disc_clears_pixels() {
        let mut canvas = Canvas::new(3).unwrap();
        canvas.fill_disc(1, 1, 2, BLUE);
        canvas.fill_disc(1, 1, 0, Rgba([0, 0, 0, 0]));

        assert_eq!(canvas.pixel(1, 1).0, [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(0, 1), BLUE);
    }
}
