use std::f64::consts::PI;
use std::time::Duration;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ArclineError, ArclineResult};

/// Visual and timing constants for the arc-line loop.
///
/// Constructed once and passed by reference into everything downstream;
/// nothing here is mutable at runtime. `Default` carries the stock palette
/// and timing; deserialized configs fill unspecified fields from it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered node colors; one chain node per entry.
    pub palette: Vec<Rgba8>,
    /// Surface clear color.
    pub back_color: Rgba8,
    /// Delay between animation ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Scale advance per tick while a pass is in flight.
    pub scale_increment: f64,
    /// Segment count the driving scale is staggered over.
    pub parts: u32,
    /// Rotation half-angle; the figure's tilt swings across
    /// `[-rotation_half_angle, +rotation_half_angle]`.
    pub rotation_half_angle: f64,
    /// Figure size = min canvas dimension / this.
    pub size_factor: f64,
    /// Stroke width = min canvas dimension / this.
    pub stroke_factor: f64,
    /// Radial line start, as a fraction of the figure size.
    pub start_length_factor: f64,
    /// Radial line growth span, as a fraction of the figure size.
    pub diff_length_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        let parts = 4u32;
        Self {
            palette: vec![
                Rgba8::from_rgb_hex(0x1abc9c),
                Rgba8::from_rgb_hex(0x2980b9),
                Rgba8::from_rgb_hex(0x2ecc71),
                Rgba8::from_rgb_hex(0x8e44ad),
                Rgba8::from_rgb_hex(0xc0392b),
            ],
            back_color: Rgba8::from_rgb_hex(0xbdbdbd),
            tick_interval_ms: 20,
            scale_increment: 0.02 / f64::from(parts),
            parts,
            rotation_half_angle: PI / 6.0,
            size_factor: 3.9,
            stroke_factor: 90.0,
            start_length_factor: 1.0 / 3.0,
            diff_length_factor: 2.0 / 3.0,
        }
    }
}

impl Config {
    /// Check every invariant the animation core assumes.
    ///
    /// Called by each constructor that takes a `Config`; after this passes,
    /// the core has no failure paths of its own.
    pub fn validate(&self) -> ArclineResult<()> {
        if self.palette.is_empty() {
            return Err(ArclineError::validation("palette must not be empty"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ArclineError::validation("tick_interval_ms must be > 0"));
        }
        if !self.scale_increment.is_finite() || self.scale_increment <= 0.0 {
            return Err(ArclineError::validation("scale_increment must be > 0"));
        }
        if self.parts == 0 {
            return Err(ArclineError::validation("parts must be > 0"));
        }
        if !self.size_factor.is_finite() || self.size_factor <= 0.0 {
            return Err(ArclineError::validation("size_factor must be > 0"));
        }
        if !self.stroke_factor.is_finite() || self.stroke_factor <= 0.0 {
            return Err(ArclineError::validation("stroke_factor must be > 0"));
        }
        if !self.rotation_half_angle.is_finite() {
            return Err(ArclineError::validation("rotation_half_angle must be finite"));
        }
        if !self.start_length_factor.is_finite() || !self.diff_length_factor.is_finite() {
            return Err(ArclineError::validation("length factors must be finite"));
        }
        Ok(())
    }

    /// Tick delay as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
