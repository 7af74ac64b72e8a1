// Temperature-regulation experiments: the daisy feedback holds the planet
// near the optimal growth temperature across a wide luminosity band, while
// the lifeless control planet just tracks the sun.

use daisyworld::planet_model::{PlanetModel, PlanetProps};
use daisyworld::sweep::{LuminositySweep, SweepParams, SweepSample};
use daisyworld::DaisyColor;
use more_asserts::{assert_gt, assert_lt};

fn sweep_params() -> SweepParams {
    SweepParams {
        min_luminosity: 0.5,
        max_luminosity: 1.7,
        luminosity_step: 0.01,
        time_per_step: 500.0,
        boost_between_steps: true,
    }
}

fn temperature_range(samples: &[SweepSample], min_lum: f64, max_lum: f64) -> (f64, f64) {
    let window: Vec<f64> = samples
        .iter()
        .filter(|s| s.luminosity >= min_lum && s.luminosity <= max_lum)
        .map(|s| s.temperature_c)
        .collect();
    let lo = window.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

#[test]
fn test_lifeless_control_rises_monotonically_concave_down() {
    let mut model = PlanetModel::new(PlanetProps {
        white: 0.0,
        black: 0.0,
        ..Default::default()
    });
    model.set_color_enabled(DaisyColor::White, false);
    model.set_color_enabled(DaisyColor::Black, false);

    let sweep = LuminositySweep::new(SweepParams {
        time_per_step: 1.0,
        boost_between_steps: false,
        ..sweep_params()
    });
    let samples = sweep.run_ascending(&mut model);

    // Monotonically increasing.
    for pair in samples.windows(2) {
        assert_gt!(pair[1].temperature_c, pair[0].temperature_c);
    }
    // Concave down: successive temperature gains shrink.
    let gains: Vec<f64> = samples
        .windows(2)
        .map(|pair| pair[1].temperature_c - pair[0].temperature_c)
        .collect();
    for pair in gains.windows(2) {
        assert_lt!(pair[1], pair[0] + 1e-9);
    }
    // Endpoints per the paper: far below freezing at 0.5, around 70 at 1.7.
    assert_lt!(samples[0].temperature_c, -20.0);
    assert_gt!(samples.last().unwrap().temperature_c, 60.0);
}

#[test]
fn test_daisies_regulate_temperature_across_luminosity_band() {
    let mut model = PlanetModel::new(PlanetProps {
        luminosity: 0.5,
        ..Default::default()
    });
    let sweep = LuminositySweep::new(sweep_params());
    let regulated = sweep.run_ascending(&mut model);

    let mut control = PlanetModel::new(PlanetProps {
        white: 0.0,
        black: 0.0,
        luminosity: 0.5,
        ..Default::default()
    });
    control.set_color_enabled(DaisyColor::White, false);
    control.set_color_enabled(DaisyColor::Black, false);
    let control_samples = LuminositySweep::new(SweepParams {
        time_per_step: 1.0,
        boost_between_steps: false,
        ..sweep_params()
    })
    .run_ascending(&mut control);

    // Inside the regulated band the planet stays near the optimal growth
    // temperature while the control spans tens of degrees.
    let (reg_lo, reg_hi) = temperature_range(&regulated, 0.9, 1.3);
    let (ctl_lo, ctl_hi) = temperature_range(&control_samples, 0.9, 1.3);

    assert_gt!(reg_lo, 12.0);
    assert_lt!(reg_hi, 32.0);
    assert_lt!(reg_hi - reg_lo, ctl_hi - ctl_lo);

    // Daisies are alive throughout the regulated band.
    for sample in regulated
        .iter()
        .filter(|s| s.luminosity >= 0.9 && s.luminosity <= 1.3)
    {
        assert_gt!(sample.white + sample.black, 0.1);
    }
}

#[test]
fn test_descending_sweep_returns_to_cold_extinction() {
    // Coarse hysteresis ramp: after the full rise and fall the sun is dim
    // again and the planet is frozen and bare.
    let mut model = PlanetModel::new(PlanetProps {
        luminosity: 0.5,
        ..Default::default()
    });
    let sweep = LuminositySweep::new(SweepParams {
        luminosity_step: 0.05,
        time_per_step: 50.0,
        ..sweep_params()
    });
    let (_rising, falling) = sweep.run_hysteresis(&mut model);

    let last = falling.last().unwrap();
    assert_lt!(last.temperature_c, 0.0);
    assert_lt!(last.white + last.black, 0.05);
}
