//! Luminosity-sweep driver: steps the sun's output across a range, letting
//! the biota equilibrate at each setting, and records where the system
//! settles. Reproduces the rising/falling luminosity experiments of the
//! Daisyworld paper, including the hysteresis between the two directions.

use crate::ground_cover::DaisyColor;
use crate::planet_model::{PlanetModel, DEFAULT_BOOST_THRESHOLDS};

#[derive(Debug, Clone)]
pub struct SweepParams {
    pub min_luminosity: f64,
    pub max_luminosity: f64,
    pub luminosity_step: f64,
    /// Equilibration time at each luminosity, in time units.
    pub time_per_step: f64,
    /// Reseed extinct colors after each luminosity change. Without this a
    /// color killed by one harsh setting would stay extinct forever.
    pub boost_between_steps: bool,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            min_luminosity: 0.5,
            max_luminosity: 1.7,
            luminosity_step: 0.01,
            time_per_step: 50.0,
            boost_between_steps: true,
        }
    }
}

/// Equilibrium state reached at one luminosity setting.
#[derive(Debug, Clone)]
pub struct SweepSample {
    pub luminosity: f64,
    pub temperature_c: f64,
    pub white: f64,
    pub black: f64,
    pub gray: f64,
}

impl SweepSample {
    fn of(model: &PlanetModel) -> SweepSample {
        SweepSample {
            luminosity: model.luminosity(),
            temperature_c: model.global_temperature(),
            white: model.proportion(DaisyColor::White),
            black: model.proportion(DaisyColor::Black),
            gray: model.proportion(DaisyColor::Gray),
        }
    }
}

pub struct LuminositySweep {
    params: SweepParams,
}

impl LuminositySweep {
    pub fn new(params: SweepParams) -> LuminositySweep {
        LuminositySweep { params }
    }

    fn luminosities_ascending(&self) -> Vec<f64> {
        let p = &self.params;
        let steps = ((p.max_luminosity - p.min_luminosity) / p.luminosity_step).round() as usize;
        (0..=steps)
            .map(|i| p.min_luminosity + p.luminosity_step * i as f64)
            .collect()
    }

    fn equilibrate_at(&self, model: &mut PlanetModel, luminosity: f64) -> SweepSample {
        model.set_luminosity(luminosity);
        if self.params.boost_between_steps {
            model.boost_if_extinct(&DEFAULT_BOOST_THRESHOLDS);
        }
        let updates =
            (self.params.time_per_step * PlanetModel::updates_per_time_unit() as f64) as u64;
        for _ in 0..updates {
            model.update();
        }
        SweepSample::of(model)
    }

    /// Sweeps the luminosity upward, sampling the equilibrium at each step.
    pub fn run_ascending(&self, model: &mut PlanetModel) -> Vec<SweepSample> {
        self.luminosities_ascending()
            .into_iter()
            .map(|lum| self.equilibrate_at(model, lum))
            .collect()
    }

    /// Sweeps the luminosity downward from max to min.
    pub fn run_descending(&self, model: &mut PlanetModel) -> Vec<SweepSample> {
        self.luminosities_ascending()
            .into_iter()
            .rev()
            .map(|lum| self.equilibrate_at(model, lum))
            .collect()
    }

    /// Full rising-then-falling ramp on one model, preserving state across
    /// the turnaround so hysteresis is visible.
    pub fn run_hysteresis(&self, model: &mut PlanetModel) -> (Vec<SweepSample>, Vec<SweepSample>) {
        let rising = self.run_ascending(model);
        let falling = self.run_descending(model);
        (rising, falling)
    }
}
