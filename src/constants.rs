// Physical constants for the Daisyworld radiative balance, from the
// Watson & Lovelock 1983 parameterization.

/// Stefan's constant in ergs / (second * cm^2 * K^4)
pub const STEFANS_CONSTANT: f64 = 0.0000567;

/// Baseline solar flux reaching the planet in ergs / (second * cm^2);
/// scaled by the dimensionless luminosity multiplier.
pub const FLUX_CONSTANT: f64 = 917_000.0;

/// Offset between the Celsius and Kelvin scales.
pub const TO_KELVIN: f64 = 273.0;

/// Degree to which absorbed solar energy is redistributed between surfaces
/// of different reflectivity. 0 would give every patch its own radiative
/// temperature; large values pin every patch to the planetary mean.
pub const CONDUCTIVITY_CONSTANT: f64 = 20.0;

// Daisy population dynamics

/// Albedo of white daisy cover.
pub const WHITE_ALBEDO: f64 = 0.75;
/// Albedo of black daisy cover.
pub const BLACK_ALBEDO: f64 = 0.25;
/// Albedo of gray daisy cover (matches bare ground).
pub const GRAY_ALBEDO: f64 = 0.5;
/// Albedo of uncovered ground.
pub const GROUND_ALBEDO: f64 = 0.5;

/// Death rate of daisy cover per time unit, independent of temperature.
pub const DEATH_RATE: f64 = 0.3;

/// Curvature of the parabolic growth-suitability curve.
pub const GROWTH_CURVE_WIDTH: f64 = 0.003265;

/// Local temperature (Celsius) at which daisy growth peaks.
pub const OPTIMAL_GROWTH_TEMP_C: f64 = 22.5;

/// Coverage below this is snapped to exactly zero. Keeps dying populations
/// from lingering as tiny positive residues or drifting negative.
pub const EXTINCTION_FLOOR: f64 = 0.001;

// Integration

/// Simulated time advanced by one `update()` call.
pub const TIME_PER_UPDATE: f64 = 0.01;

/// Number of `update()` calls per unit of simulated time.
pub const UPDATES_PER_TIME_UNIT: u64 = 100;

// Round-planet latitude discretization

/// Internal latitude resolution. Band 0 is the most polar, band
/// `LATITUDE_BANDS - 1` the most equatorial.
pub const LATITUDE_BANDS: usize = 90;

/// Coarse band count exposed for visualization.
pub const DISPLAY_BANDS: usize = 10;

/// Insolation multiplier at the polar band.
pub const POLAR_INSOLATION: f64 = 0.6;

/// Insolation multiplier at the equatorial band.
pub const EQUATORIAL_INSOLATION: f64 = 1.5;

/// Below this aggregate proportion a color is too sparse for a meaningful
/// mean habitat latitude.
pub const LATITUDE_STAT_FLOOR: f64 = 0.0001;
