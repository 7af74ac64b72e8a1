//! Scenario configuration: a serializable description of a run's initial
//! conditions, loadable from JSON so drivers can be configured without
//! recompiling.

use crate::ground_cover::DaisyColor;
use crate::planet_model::{PlanetModel, PlanetProps, Topology};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Initial proportions of ground covered by each daisy color.
    pub white: f64,
    pub black: f64,
    pub gray: f64,
    /// Dimensionless solar output multiplier.
    pub luminosity: f64,
    pub topology: Topology,
    pub white_enabled: bool,
    pub black_enabled: bool,
    pub gray_enabled: bool,
    pub growth_enabled: bool,
    /// Run length in time units (100 updates each).
    pub time_units: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            white: 0.5,
            black: 0.5,
            gray: 0.0,
            luminosity: 1.0,
            topology: Topology::Flat,
            white_enabled: true,
            black_enabled: true,
            gray_enabled: false,
            growth_enabled: true,
            time_units: 100.0,
        }
    }
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Scenario, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse scenario JSON: {}", e))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Scenario, String> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;
        Scenario::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scenario: {}", e))
    }

    /// Builds a model in this scenario's starting state.
    pub fn build(&self) -> PlanetModel {
        let mut model = PlanetModel::new(PlanetProps {
            white: self.white,
            black: self.black,
            gray: self.gray,
            luminosity: self.luminosity,
            topology: self.topology,
        });
        model.set_color_enabled(DaisyColor::White, self.white_enabled);
        model.set_color_enabled(DaisyColor::Black, self.black_enabled);
        model.set_color_enabled(DaisyColor::Gray, self.gray_enabled);
        model.set_growth_enabled(self.growth_enabled);
        model
    }

    /// Number of `update()` calls this scenario's run length corresponds to.
    pub fn total_updates(&self) -> u64 {
        (self.time_units * PlanetModel::updates_per_time_unit() as f64).round() as u64
    }
}
