//! Latitude-resolved run: equilibrates a round planet and prints the coarse
//! display bands plus per-color habitat statistics.

use daisyworld::constants::DISPLAY_BANDS;
use daisyworld::planet_model::{PlanetModel, PlanetProps, Topology};
use daisyworld::recorder::DataRecorder;
use daisyworld::report;
use daisyworld::DaisyColor;

fn print_habitat_stats(model: &PlanetModel, color: DaisyColor) {
    let mean = model.average_latitude(color).unwrap_or(f64::NAN);
    if mean.is_nan() {
        println!("{:>5}: too sparse for habitat statistics", color.name());
        return;
    }
    let min = model.min_latitude(color).unwrap();
    let max = model.max_latitude(color).unwrap();
    println!(
        "{:>5}: bands {}..{} (mean {:.1}), coverage {:.3}",
        color.name(),
        min,
        max,
        mean,
        model.proportion(color)
    );
}

fn main() -> Result<(), String> {
    let mut model = PlanetModel::new(PlanetProps {
        topology: Topology::Round,
        ..Default::default()
    });

    let cadence = PlanetModel::updates_per_time_unit();
    let mut recorder = DataRecorder::with_standard_fields(cadence);
    recorder.register_latitude_fields();

    for _ in 0..(100 * cadence) {
        model.update();
        recorder.tick(&model);
        report::report_progress(&model, cadence * 20);
    }

    println!("\nEquilibrium: {}", report::model_summary(&model));

    println!("\nDisplay bands, equator (0) to pole ({}):", DISPLAY_BANDS - 1);
    for display in 0..DISPLAY_BANDS {
        let white = model
            .display_band_proportion(DaisyColor::White, display)
            .unwrap();
        let black = model
            .display_band_proportion(DaisyColor::Black, display)
            .unwrap();
        println!(
            "  band {:>2}: white {:.3}  black {:.3}  ground {:.3}",
            display,
            white,
            black,
            1.0 - white - black
        );
    }

    println!("\nHabitat latitudes (0 = pole, 89 = equator):");
    for color in [DaisyColor::White, DaisyColor::Black] {
        print_habitat_stats(&model, color);
    }

    recorder.write_csv_file("round_world.csv")?;
    println!("\nWrote round_world.csv");
    Ok(())
}
