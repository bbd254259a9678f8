//! Sizing, color, and styling constants for the picker.

/// Minimum side length of the wheel area
pub const MIN_WHEEL_SIZE: f32 = 100.0;

/// Swatch marker radius on the wheel
pub const SWATCH_RADIUS: f64 = 15.0;

/// Swatch marker border width
pub const SWATCH_BORDER: f64 = 2.0;

/// Color chip size in the swatch list
pub const CHIP_SIZE: f32 = 16.0;

/// Border radius for chips
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Hex label font size
pub const HEX_FONT: f32 = 12.0;
