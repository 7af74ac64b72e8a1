//! Latitude-band arithmetic for the round planet: per-band insolation
//! weighting, the coarse display-band mapping, and habitat statistics.
//!
//! Bands are identified purely by index into the owning model's array:
//! index 0 is the most polar band, index `LATITUDE_BANDS - 1` the most
//! equatorial.

use crate::constants::{
    DISPLAY_BANDS, EQUATORIAL_INSOLATION, LATITUDE_BANDS, LATITUDE_STAT_FLOOR, POLAR_INSOLATION,
};
use crate::ground_cover::{DaisyColor, GroundCover};
use crate::math_utils::lerp;
use std::ops::Range;

/// Share of baseline insolation a band receives, interpolated linearly from
/// the pole (0.6) to the equator (1.5).
pub fn insolation_multiplier(band: usize) -> f64 {
    let ratio = band as f64 / (LATITUDE_BANDS - 1) as f64;
    lerp(POLAR_INSOLATION, EQUATORIAL_INSOLATION, ratio)
}

/// Range of internal bands aggregated into one display band. Display band 0
/// covers the most equatorial slice of the internal array, display band
/// `DISPLAY_BANDS - 1` the most polar.
///
/// # Panics
/// Panics if `display >= DISPLAY_BANDS`.
pub fn display_band_range(display: usize) -> Range<usize> {
    assert!(
        display < DISPLAY_BANDS,
        "display band {} out of range 0..{}",
        display,
        DISPLAY_BANDS
    );
    let width = LATITUDE_BANDS / DISPLAY_BANDS;
    (LATITUDE_BANDS - width * (display + 1))..(LATITUDE_BANDS - width * display)
}

/// Unweighted mean proportion of a color across the internal bands of one
/// display band.
pub fn display_band_proportion(bands: &[GroundCover], color: DaisyColor, display: usize) -> f64 {
    let range = display_band_range(display);
    let width = range.len() as f64;
    bands[range].iter().map(|b| b.proportion(color)).sum::<f64>() / width
}

/// Planet-wide proportion of a color: the unweighted mean over all bands.
pub fn aggregate_proportion(bands: &[GroundCover], color: DaisyColor) -> f64 {
    bands.iter().map(|b| b.proportion(color)).sum::<f64>() / bands.len() as f64
}

/// Planet-wide bare-ground proportion.
pub fn aggregate_ground(bands: &[GroundCover]) -> f64 {
    bands.iter().map(|b| b.proportion_of_ground()).sum::<f64>() / bands.len() as f64
}

/// Proportion-weighted centroid of a color's coverage, as a band index.
///
/// Returns NaN when the color's total coverage is below the statistics
/// floor. NaN is the domain sentinel for "no meaningful habitat" and is
/// reserved for this purpose; callers must check with `is_nan` before using
/// the value numerically.
pub fn average_latitude(bands: &[GroundCover], color: DaisyColor) -> f64 {
    let total: f64 = bands.iter().map(|b| b.proportion(color)).sum();
    if total / (bands.len() as f64) < LATITUDE_STAT_FLOOR {
        return f64::NAN;
    }
    let weighted: f64 = bands
        .iter()
        .enumerate()
        .map(|(i, b)| i as f64 * b.proportion(color))
        .sum();
    weighted / total
}

/// Most polar band index with any coverage of the color, or None when the
/// color is absent everywhere.
pub fn min_latitude(bands: &[GroundCover], color: DaisyColor) -> Option<usize> {
    bands.iter().position(|b| b.proportion(color) > 0.0)
}

/// Most equatorial band index with any coverage of the color, or None when
/// the color is absent everywhere.
pub fn max_latitude(bands: &[GroundCover], color: DaisyColor) -> Option<usize> {
    bands.iter().rposition(|b| b.proportion(color) > 0.0)
}
