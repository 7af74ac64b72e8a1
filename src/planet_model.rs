//! The planetary model: radiative balance, daisy population dynamics, and
//! the explicit time-stepping integrator that couples them.

use crate::constants::{
    CONDUCTIVITY_CONSTANT, DEATH_RATE, GROWTH_CURVE_WIDTH, LATITUDE_BANDS, OPTIMAL_GROWTH_TEMP_C,
    TIME_PER_UPDATE, UPDATES_PER_TIME_UNIT,
};
use crate::ground_cover::{DaisyColor, GroundCover};
use crate::latitude;
use crate::temp_utils::radiative_equilibrium_celsius;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashMap;

/// Whether the planet is modeled as one homogeneous region or as an array
/// of latitude bands with differing insolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    Flat,
    Round,
}

#[derive(Debug, Clone)]
enum Surface {
    Flat(GroundCover),
    Round(Vec<GroundCover>),
}

/// Initial conditions for a model run.
#[derive(Debug, Clone)]
pub struct PlanetProps {
    pub white: f64,
    pub black: f64,
    pub gray: f64,
    pub luminosity: f64,
    pub topology: Topology,
}

impl Default for PlanetProps {
    fn default() -> Self {
        Self {
            white: 0.5,
            black: 0.5,
            gray: 0.0,
            luminosity: 1.0,
            topology: Topology::Flat,
        }
    }
}

/// Default reseeding thresholds for [`PlanetModel::boost_if_extinct`]: the
/// smallest populations that can recolonize once the climate turns
/// favorable again.
pub static DEFAULT_BOOST_THRESHOLDS: Lazy<HashMap<DaisyColor, f64>> = Lazy::new(|| {
    let mut thresholds = HashMap::new();
    for color in DaisyColor::ALL {
        thresholds.insert(color, 0.01);
    }
    thresholds
});

/// Growth suitability at a given local temperature (Celsius): a downward
/// parabola peaking at 1.0 at the optimal temperature and going negative
/// outside roughly [7.5, 37.5] Celsius. Shared by all daisy colors.
pub fn growth_potential(local_temp_c: f64) -> f64 {
    let offset = OPTIMAL_GROWTH_TEMP_C - local_temp_c;
    1.0 - GROWTH_CURVE_WIDTH * offset * offset
}

/// A Daisyworld planet advanced by discrete `update()` calls from a driver.
///
/// Single-writer, single-reader: the cached albedo/temperature cells are a
/// pure optimization under that assumption, not thread-safe memoization.
pub struct PlanetModel {
    luminosity: f64,
    growth_enabled: bool,
    enabled: [bool; 3],
    surface: Surface,
    cached_albedo: Cell<Option<f64>>,
    cached_temperature: Cell<Option<f64>>,
    updates: u64,
}

impl PlanetModel {
    pub fn new(props: PlanetProps) -> PlanetModel {
        let cover = GroundCover::new(props.white, props.black, props.gray);
        let surface = match props.topology {
            Topology::Flat => Surface::Flat(cover),
            Topology::Round => Surface::Round(vec![cover; LATITUDE_BANDS]),
        };
        PlanetModel {
            luminosity: props.luminosity.max(0.0),
            growth_enabled: true,
            enabled: [true; 3],
            surface,
            cached_albedo: Cell::new(None),
            cached_temperature: Cell::new(None),
            updates: 0,
        }
    }

    fn invalidate_caches(&mut self) {
        self.cached_albedo.set(None);
        self.cached_temperature.set(None);
    }

    // --- mutators ---

    pub fn set_luminosity(&mut self, luminosity: f64) {
        self.luminosity = luminosity.max(0.0);
        self.invalidate_caches();
    }

    /// Enables or disables one daisy color. Disabling zeroes its coverage
    /// everywhere and excludes it from growth and boosting.
    pub fn set_color_enabled(&mut self, color: DaisyColor, enabled: bool) {
        self.enabled[color.slot()] = enabled;
        if !enabled {
            match &mut self.surface {
                Surface::Flat(cover) => cover.set_proportion(color, 0.0),
                Surface::Round(bands) => {
                    for band in bands.iter_mut() {
                        band.set_proportion(color, 0.0);
                    }
                }
            }
        }
        self.invalidate_caches();
    }

    /// Freezes or unfreezes coverage. While frozen, `update()` still
    /// advances the clock, which supports static-scenario measurements.
    pub fn set_growth_enabled(&mut self, enabled: bool) {
        self.growth_enabled = enabled;
    }

    /// Switches between the flat and round topologies. Flat to round
    /// replicates the flat cover into every band; round to flat averages
    /// the bands uniformly, which conserves each color's planet-wide
    /// aggregate. Switching to the current topology is a no-op.
    pub fn set_topology(&mut self, topology: Topology) {
        let next = match (&self.surface, topology) {
            (Surface::Flat(_), Topology::Flat) | (Surface::Round(_), Topology::Round) => return,
            (Surface::Flat(cover), Topology::Round) => {
                Surface::Round(vec![cover.clone(); LATITUDE_BANDS])
            }
            (Surface::Round(bands), Topology::Flat) => {
                let white = latitude::aggregate_proportion(bands, DaisyColor::White);
                let black = latitude::aggregate_proportion(bands, DaisyColor::Black);
                let gray = latitude::aggregate_proportion(bands, DaisyColor::Gray);
                Surface::Flat(GroundCover::new(white, black, gray))
            }
        };
        self.surface = next;
        self.invalidate_caches();
    }

    /// Reseeds any enabled color whose planet-wide proportion has fallen
    /// below its threshold, forcing it up to exactly the threshold. Growth
    /// is proportional to existing coverage, so a fully extinct color could
    /// never recolonize on its own; drivers call this after changing the
    /// luminosity.
    ///
    /// In round mode the boost is applied band by band: every band below
    /// the threshold is raised to it, which sets the aggregate (a mean of
    /// bands) to at least the threshold as well.
    pub fn boost_if_extinct(&mut self, thresholds: &HashMap<DaisyColor, f64>) {
        let mut changed = false;
        for color in DaisyColor::ALL {
            if !self.enabled[color.slot()] {
                continue;
            }
            let Some(&threshold) = thresholds.get(&color) else {
                continue;
            };
            if self.proportion(color) >= threshold {
                continue;
            }
            match &mut self.surface {
                Surface::Flat(cover) => cover.set_proportion(color, threshold),
                Surface::Round(bands) => {
                    for band in bands.iter_mut() {
                        if band.proportion(color) < threshold {
                            band.set_proportion(color, threshold);
                        }
                    }
                }
            }
            changed = true;
        }
        if changed {
            self.invalidate_caches();
        }
    }

    /// Advances the model by one integration step of `TIME_PER_UPDATE`.
    ///
    /// Every growth delta for this step is computed from the same pre-step
    /// snapshot of albedo, temperature, and coverage before any delta is
    /// applied, so the order in which colors and bands are visited never
    /// affects the result.
    pub fn update(&mut self) {
        self.updates += 1;
        if !self.growth_enabled {
            return;
        }

        let albedo = self.global_albedo();
        let temperature = self.global_temperature();
        let enabled = self.enabled;

        match &mut self.surface {
            Surface::Flat(cover) => {
                let mut deltas = [0.0; 3];
                for color in DaisyColor::ALL {
                    if !enabled[color.slot()] {
                        continue;
                    }
                    let local = flat_local_temperature(albedo, temperature, color);
                    deltas[color.slot()] = cover_growth_rate(cover, color, local) * TIME_PER_UPDATE;
                }
                for color in DaisyColor::ALL {
                    if enabled[color.slot()] {
                        cover.increment_color(color, deltas[color.slot()]);
                    }
                }
            }
            Surface::Round(bands) => {
                for (index, band) in bands.iter_mut().enumerate() {
                    let mut deltas = [0.0; 3];
                    for color in DaisyColor::ALL {
                        if !enabled[color.slot()] {
                            continue;
                        }
                        let local = band_local_temperature(albedo, temperature, color, index);
                        deltas[color.slot()] =
                            cover_growth_rate(band, color, local) * TIME_PER_UPDATE;
                    }
                    for color in DaisyColor::ALL {
                        if enabled[color.slot()] {
                            band.increment_color(color, deltas[color.slot()]);
                        }
                    }
                }
            }
        }

        self.invalidate_caches();
    }

    // --- queries ---

    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    pub fn color_enabled(&self, color: DaisyColor) -> bool {
        self.enabled[color.slot()]
    }

    pub fn growth_enabled(&self) -> bool {
        self.growth_enabled
    }

    pub fn topology(&self) -> Topology {
        match self.surface {
            Surface::Flat(_) => Topology::Flat,
            Surface::Round(_) => Topology::Round,
        }
    }

    /// Number of `update()` calls made so far. The published "time" field.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Simulated time elapsed, in time units of 100 updates.
    pub fn time(&self) -> f64 {
        self.updates as f64 * TIME_PER_UPDATE
    }

    pub fn updates_per_time_unit() -> u64 {
        UPDATES_PER_TIME_UNIT
    }

    /// Planet-wide albedo. Flat: the single region's area-weighted albedo.
    /// Round: the insolation-weighted mean of per-band albedo, so the
    /// brightly lit equatorial bands count for more than the poles.
    pub fn global_albedo(&self) -> f64 {
        if let Some(albedo) = self.cached_albedo.get() {
            return albedo;
        }
        let albedo = match &self.surface {
            Surface::Flat(cover) => cover.total_albedo(),
            Surface::Round(bands) => {
                bands
                    .iter()
                    .enumerate()
                    .map(|(i, band)| band.total_albedo() * latitude::insolation_multiplier(i))
                    .sum::<f64>()
                    / LATITUDE_BANDS as f64
            }
        };
        self.cached_albedo.set(Some(albedo));
        albedo
    }

    /// Planetary mean temperature in Celsius from the Stefan-Boltzmann
    /// balance. Cached jointly with the albedo; both are invalidated by
    /// every mutator.
    pub fn global_temperature(&self) -> f64 {
        if let Some(temperature) = self.cached_temperature.get() {
            return temperature;
        }
        let temperature = radiative_equilibrium_celsius(self.luminosity, self.global_albedo());
        self.cached_temperature.set(Some(temperature));
        temperature
    }

    /// Temperature of a patch of the given color, conduction-blended with
    /// the planetary mean: darker-than-average patches run hotter,
    /// lighter-than-average run cooler.
    pub fn local_temperature(&self, color: DaisyColor) -> f64 {
        flat_local_temperature(self.global_albedo(), self.global_temperature(), color)
    }

    /// Round-mode variant: the patch's absorptivity is scaled by the band's
    /// insolation multiplier before conduction, so polar patches of a color
    /// run cooler than equatorial patches of the same color.
    pub fn local_temperature_in_band(&self, color: DaisyColor, band: usize) -> f64 {
        band_local_temperature(self.global_albedo(), self.global_temperature(), color, band)
    }

    /// Net growth rate of a color per time unit, planet-wide (flat form).
    /// Zero whenever the color has zero coverage.
    pub fn growth_rate(&self, color: DaisyColor) -> f64 {
        match &self.surface {
            Surface::Flat(cover) => {
                cover_growth_rate(cover, color, self.local_temperature(color))
            }
            Surface::Round(bands) => {
                let albedo = self.global_albedo();
                let temperature = self.global_temperature();
                bands
                    .iter()
                    .enumerate()
                    .map(|(i, band)| {
                        let local = band_local_temperature(albedo, temperature, color, i);
                        cover_growth_rate(band, color, local)
                    })
                    .sum::<f64>()
                    / LATITUDE_BANDS as f64
            }
        }
    }

    /// Net growth rate of a color in one latitude band (round mode only).
    pub fn growth_rate_in_band(&self, color: DaisyColor, band: usize) -> Option<f64> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => {
                let local = self.local_temperature_in_band(color, band);
                Some(cover_growth_rate(&bands[band], color, local))
            }
        }
    }

    /// Planet-wide proportion of a color.
    pub fn proportion(&self, color: DaisyColor) -> f64 {
        match &self.surface {
            Surface::Flat(cover) => cover.proportion(color),
            Surface::Round(bands) => latitude::aggregate_proportion(bands, color),
        }
    }

    /// Planet-wide bare-ground proportion.
    pub fn proportion_of_ground(&self) -> f64 {
        match &self.surface {
            Surface::Flat(cover) => cover.proportion_of_ground(),
            Surface::Round(bands) => latitude::aggregate_ground(bands),
        }
    }

    /// Mean proportion of a color across one coarse display band. None in
    /// flat mode or for an out-of-range display index.
    pub fn display_band_proportion(&self, color: DaisyColor, display: usize) -> Option<f64> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => {
                if display >= crate::constants::DISPLAY_BANDS {
                    return None;
                }
                Some(latitude::display_band_proportion(bands, color, display))
            }
        }
    }

    /// Proportion-weighted mean habitat latitude of a color, as a band
    /// index. None in flat mode; NaN inside the Some when the color is too
    /// sparse for the statistic to be meaningful.
    pub fn average_latitude(&self, color: DaisyColor) -> Option<f64> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => Some(latitude::average_latitude(bands, color)),
        }
    }

    /// Most polar band with any coverage of the color. None in flat mode or
    /// when the color is absent everywhere.
    pub fn min_latitude(&self, color: DaisyColor) -> Option<usize> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => latitude::min_latitude(bands, color),
        }
    }

    /// Most equatorial band with any coverage of the color. None in flat
    /// mode or when the color is absent everywhere.
    pub fn max_latitude(&self, color: DaisyColor) -> Option<usize> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => latitude::max_latitude(bands, color),
        }
    }

    /// The latitude-band array, round mode only.
    pub fn bands(&self) -> Option<&[GroundCover]> {
        match &self.surface {
            Surface::Flat(_) => None,
            Surface::Round(bands) => Some(bands),
        }
    }
}

fn flat_local_temperature(albedo: f64, global_temp_c: f64, color: DaisyColor) -> f64 {
    CONDUCTIVITY_CONSTANT * (albedo - color.albedo()) + global_temp_c
}

fn band_local_temperature(albedo: f64, global_temp_c: f64, color: DaisyColor, band: usize) -> f64 {
    // Scale the patch's absorptivity by the band's share of insolation,
    // then conduct against the planetary mean as in the flat case. With a
    // multiplier of 1 this reduces exactly to the flat formula.
    let scaled_absorption = latitude::insolation_multiplier(band) * (1.0 - color.albedo());
    let effective_albedo = 1.0 - scaled_absorption;
    CONDUCTIVITY_CONSTANT * (albedo - effective_albedo) + global_temp_c
}

fn cover_growth_rate(cover: &GroundCover, color: DaisyColor, local_temp_c: f64) -> f64 {
    cover.proportion(color)
        * (growth_potential(local_temp_c) * cover.proportion_of_ground() - DEATH_RATE)
}
