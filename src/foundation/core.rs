use crate::foundation::error::{ArclineError, ArclineResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Drawing surface dimensions in pixels, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated dimensions (both must be non-zero).
    pub fn new(width: u32, height: u32) -> ArclineResult<Self> {
        if width == 0 || height == 0 {
            return Err(ArclineError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// The smaller of the two dimensions; figure sizing and stroke width
    /// derive from this so the shape fits either orientation.
    pub fn min_dim(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Surface center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from individual channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 255,
        }
    }

    /// The color as a `[r, g, b, a]` byte quad.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_zero_dimensions() {
        assert!(Canvas::new(0, 100).is_err());
        assert!(Canvas::new(100, 0).is_err());
        assert!(Canvas::new(1, 1).is_ok());
    }

    #[test]
    fn canvas_min_dim_and_center() {
        let c = Canvas::new(600, 400).unwrap();
        assert_eq!(c.min_dim(), 400.0);
        assert_eq!(c.center(), Point::new(300.0, 200.0));
    }

    #[test]
    fn rgb_hex_unpacks_channels() {
        let c = Rgba8::from_rgb_hex(0x1abc9c);
        assert_eq!(c, Rgba8::rgb(0x1a, 0xbc, 0x9c));
        assert_eq!(c.to_array(), [0x1a, 0xbc, 0x9c, 0xff]);
    }
}
