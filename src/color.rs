//! # Module: Color Mapping
//!
//! ## Responsibility
//! Maps an HP magnitude onto a linear green→red ramp.
//!
//! ## Guarantees
//! - Channels are always within 0–255, even for out-of-range magnitudes
//! - Red is non-decreasing and green non-increasing as magnitude grows
//! - Blue is always 0

/// Default upper bound of the HP ramp.
pub const DEFAULT_HP_MAX: u32 = 500;

/// Background for grid positions with no entry.
pub const PLACEHOLDER: Rgb = Rgb::new(192, 192, 192);

/// Foreground color for cell labels.
pub const LABEL_FG: Rgb = Rgb::new(0, 0, 0);

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Returns the ramp color for `hp` on a scale topping out at `max`.
///
/// red = round(255 × hp/max), green = round(255 × (1 − hp/max)), blue = 0.
/// A `max` of zero is treated as 1.
pub fn hp_color(hp: u32, max: u32) -> Rgb {
    let ratio = hp as f64 / max.max(1) as f64;
    Rgb::new(channel(ratio), channel(1.0 - ratio), 0)
}

/// Scales a 0–1 ratio to a channel value, clamping anything outside.
fn channel(ratio: f64) -> u8 {
    (255.0 * ratio).round().clamp(0.0, 255.0) as u8
}
