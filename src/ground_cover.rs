//! Daisy coverage state for a single region of ground.

use crate::constants::{
    BLACK_ALBEDO, EXTINCTION_FLOOR, GRAY_ALBEDO, GROUND_ALBEDO, WHITE_ALBEDO,
};
use serde::{Deserialize, Serialize};

/// The pigmentation variants a patch of daisies can have. Each has a fixed
/// albedo; gray is an extension variant whose albedo matches bare ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DaisyColor {
    White,
    Black,
    Gray,
}

impl DaisyColor {
    pub const ALL: [DaisyColor; 3] = [DaisyColor::White, DaisyColor::Black, DaisyColor::Gray];

    /// Fraction of incident light reflected by cover of this color.
    pub fn albedo(self) -> f64 {
        match self {
            DaisyColor::White => WHITE_ALBEDO,
            DaisyColor::Black => BLACK_ALBEDO,
            DaisyColor::Gray => GRAY_ALBEDO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DaisyColor::White => "white",
            DaisyColor::Black => "black",
            DaisyColor::Gray => "gray",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            DaisyColor::White => 0,
            DaisyColor::Black => 1,
            DaisyColor::Gray => 2,
        }
    }
}

/// Proportions of one region covered by each daisy color. Whatever is not
/// covered by a daisy is bare ground.
///
/// Invariant: every proportion lies in [0, 1] and the sum of all color
/// proportions never exceeds 1, so the bare-ground proportion is never
/// negative.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundCover {
    proportions: [f64; 3],
}

impl GroundCover {
    /// Builds cover from initial proportions. Each value is clamped into
    /// [0, 1]; if the clamped values still sum past 1 they are scaled down
    /// proportionally so the invariant holds from the start.
    pub fn new(white: f64, black: f64, gray: f64) -> GroundCover {
        let mut proportions = [
            white.clamp(0.0, 1.0),
            black.clamp(0.0, 1.0),
            gray.clamp(0.0, 1.0),
        ];
        let total: f64 = proportions.iter().sum();
        if total > 1.0 {
            for p in proportions.iter_mut() {
                *p /= total;
            }
        }
        GroundCover { proportions }
    }

    /// A region with no daisies at all.
    pub fn bare() -> GroundCover {
        GroundCover::new(0.0, 0.0, 0.0)
    }

    pub fn proportion(&self, color: DaisyColor) -> f64 {
        self.proportions[color.slot()]
    }

    /// Directly assigns a color's proportion, clamped so the total cover
    /// stays within 1. Used for extinction boosts and for zeroing a color
    /// when it is disabled.
    pub fn set_proportion(&mut self, color: DaisyColor, value: f64) {
        let available = self.proportion(color) + self.proportion_of_ground();
        self.proportions[color.slot()] = value.clamp(0.0, available);
    }

    /// Fraction of this region that is uncovered ground.
    pub fn proportion_of_ground(&self) -> f64 {
        1.0 - self.proportions.iter().sum::<f64>()
    }

    /// Applies a growth (or death) delta to one color. The result is capped
    /// at the available bare ground, and anything that lands below the
    /// extinction floor snaps to exactly zero.
    pub fn increment_color(&mut self, color: DaisyColor, delta: f64) {
        let current = self.proportion(color);
        let available = current + self.proportion_of_ground();
        let mut next = current + delta;
        if next > available {
            next = available;
        }
        if next < EXTINCTION_FLOOR {
            next = 0.0;
        }
        self.proportions[color.slot()] = next;
    }

    /// Area-weighted albedo of this region: daisy cover at each color's
    /// albedo plus bare ground at the ground albedo.
    pub fn total_albedo(&self) -> f64 {
        let daisies: f64 = DaisyColor::ALL
            .iter()
            .map(|&c| self.proportion(c) * c.albedo())
            .sum();
        daisies + self.proportion_of_ground() * GROUND_ALBEDO
    }
}
