// Round-topology behavior: latitude-resolved growth, habitat statistics,
// and aggregate conservation across topology switches.

use daisyworld::constants::{DISPLAY_BANDS, LATITUDE_BANDS};
use daisyworld::planet_model::{PlanetModel, PlanetProps, Topology};
use daisyworld::DaisyColor;
use approx::assert_abs_diff_eq;
use more_asserts::{assert_gt, assert_lt};

fn equilibrated_round_model() -> PlanetModel {
    let mut model = PlanetModel::new(PlanetProps {
        topology: Topology::Round,
        ..Default::default()
    });
    for _ in 0..10_000 {
        model.update();
    }
    model
}

#[test]
fn test_daisies_sort_by_latitude() {
    // Black patches run hot, so black does best in the cool polar bands;
    // white does best toward the equator. The mean habitat latitudes must
    // reflect that separation.
    let model = equilibrated_round_model();

    assert_gt!(model.proportion(DaisyColor::White), 0.01);
    assert_gt!(model.proportion(DaisyColor::Black), 0.01);

    let black_lat = model.average_latitude(DaisyColor::Black).unwrap();
    let white_lat = model.average_latitude(DaisyColor::White).unwrap();
    assert!(!black_lat.is_nan());
    assert!(!white_lat.is_nan());
    assert_lt!(black_lat, white_lat);
}

#[test]
fn test_habitat_extents_are_ordered() {
    let model = equilibrated_round_model();

    for color in [DaisyColor::White, DaisyColor::Black] {
        let min = model.min_latitude(color).unwrap();
        let max = model.max_latitude(color).unwrap();
        let mean = model.average_latitude(color).unwrap();
        assert!(min <= max);
        assert!(mean >= min as f64 && mean <= max as f64);
        assert_lt!(max, LATITUDE_BANDS);
    }
}

#[test]
fn test_display_bands_summarize_internal_bands() {
    let model = equilibrated_round_model();

    for color in [DaisyColor::White, DaisyColor::Black] {
        // Mean of the display bands equals the planet-wide aggregate, since
        // the display bands partition the internal array evenly.
        let display_mean: f64 = (0..DISPLAY_BANDS)
            .map(|d| model.display_band_proportion(color, d).unwrap())
            .sum::<f64>()
            / DISPLAY_BANDS as f64;
        assert_abs_diff_eq!(display_mean, model.proportion(color), epsilon = 1e-9);
    }
    assert_eq!(
        model.display_band_proportion(DaisyColor::White, DISPLAY_BANDS),
        None
    );
}

#[test]
fn test_round_to_flat_conserves_aggregates_after_divergence() {
    // Let the bands differentiate, then flatten: per-color planet-wide
    // aggregates must survive the averaging.
    let mut model = equilibrated_round_model();
    let white = model.proportion(DaisyColor::White);
    let black = model.proportion(DaisyColor::Black);

    model.set_topology(Topology::Flat);

    assert_abs_diff_eq!(model.proportion(DaisyColor::White), white, epsilon = 1e-9);
    assert_abs_diff_eq!(model.proportion(DaisyColor::Black), black, epsilon = 1e-9);
}

#[test]
fn test_latitude_queries_unavailable_in_flat_mode() {
    let model = PlanetModel::new(PlanetProps::default());
    assert_eq!(model.average_latitude(DaisyColor::White), None);
    assert_eq!(model.min_latitude(DaisyColor::White), None);
    assert_eq!(model.max_latitude(DaisyColor::White), None);
    assert_eq!(model.display_band_proportion(DaisyColor::White, 0), None);
    assert_eq!(model.bands(), None);
}

#[test]
fn test_round_world_still_regulates() {
    // The latitude-resolved planet should also hold a habitable mean
    // temperature at luminosity 1.
    let model = equilibrated_round_model();
    assert_gt!(model.global_temperature(), 10.0);
    assert_lt!(model.global_temperature(), 35.0);
}
