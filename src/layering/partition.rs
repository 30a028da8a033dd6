//! Velocity range partitioning
//!
//! Splits the normalized velocity interval between the layers of an
//! instrument. Every window is `(1 / count) * (1 + interleave)` wide, so
//! neighbouring layers overlap and the host can crossfade between them.
//! The windows are spread evenly from 0 so that the last one ends at 1,
//! except for a lone layer whose window is `1 + interleave` wide. Upper
//! bounds are never clamped.
//!
//! Mins only stay non-decreasing while a window is at most 1 wide, which
//! holds for every layer count when `interleave <= 1`.

use serde::Serialize;

/// Default overlap between neighbouring layers: each window is widened by
/// a third of an even split.
pub const DEFAULT_INTERLEAVE: f64 = 1.0 / 3.0;

/// Velocity window of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityRange {
    pub min: f64,
    pub max: f64,
}

/// Compute one velocity window per layer, in layer order.
///
/// # Arguments
/// * `layer_count` - Number of layers of the instrument
/// * `interleave` - Fraction by which every window exceeds an even split
pub fn partition(layer_count: usize, interleave: f64) -> Vec<VelocityRange> {
    if layer_count == 0 {
        return Vec::new();
    }

    let length = (1.0 / layer_count as f64) * (1.0 + interleave);

    if layer_count == 1 {
        return vec![VelocityRange {
            min: 0.0,
            max: length,
        }];
    }

    let offset = (1.0 - length) / (layer_count - 1) as f64;

    (0..layer_count)
        .map(|i| {
            let min = i as f64 * offset;
            VelocityRange {
                min,
                max: min + length,
            }
        })
        .collect()
}
