//! Utilities for converting between absorbed solar flux and equilibrium
//! temperature using the Stefan-Boltzmann equation.

use crate::constants::{FLUX_CONSTANT, STEFANS_CONSTANT, TO_KELVIN};

/// Converts Celsius to Kelvin.
pub fn celsius_to_kelvin(temp_c: f64) -> f64 {
    temp_c + TO_KELVIN
}

/// Converts Kelvin to Celsius.
pub fn kelvin_to_celsius(temp_k: f64) -> f64 {
    temp_k - TO_KELVIN
}

/// Equilibrium temperature in Kelvin of a body absorbing the given fraction
/// of incident flux, by inverting the Stefan-Boltzmann equation.
///
/// # Arguments
/// - `luminosity`: dimensionless multiplier on the baseline solar flux
/// - `albedo`: fraction of incident flux reflected rather than absorbed
pub fn radiative_equilibrium_kelvin(luminosity: f64, albedo: f64) -> f64 {
    let absorption = 1.0 - albedo;
    ((FLUX_CONSTANT * luminosity * absorption) / STEFANS_CONSTANT).powf(0.25)
}

/// Equilibrium temperature in Celsius. Equation (4) of the Daisyworld paper.
pub fn radiative_equilibrium_celsius(luminosity: f64, albedo: f64) -> f64 {
    kelvin_to_celsius(radiative_equilibrium_kelvin(luminosity, albedo))
}
