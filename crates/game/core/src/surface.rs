//! Logical render-surface geometry.
//!
//! The surface is a fixed 512-unit square split into four 256-unit quadrant
//! slots; slot order matches die order. Viewports of any size map onto it
//! through a single uniform scale factor.

use crate::engine::DICE_COUNT;

/// Edge length of the logical canvas, in logical units.
pub const LOGICAL_SIZE: u32 = 512;

/// Edge length of one die tile, in logical units.
pub const TILE_SIZE: u32 = 256;

/// Top-left corners of the four die slots, in slot order.
pub const SLOT_ORIGINS: [(u32, u32); DICE_COUNT] = [(0, 0), (256, 0), (0, 256), (256, 256)];

/// Scale from logical units to viewport units.
///
/// The canvas is fitted square to the shorter viewport edge, so a 256x256
/// viewport yields 0.5 and anything at least 512 on both edges yields >= 1.
pub fn scale_factor(viewport_width: u32, viewport_height: u32) -> f64 {
    f64::from(viewport_width.min(viewport_height)) / f64::from(LOGICAL_SIZE)
}
