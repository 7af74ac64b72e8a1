//! Constant-luminosity runs from the Daisyworld paper: black daisies alone,
//! then black and white together, each recorded once per time unit.

use daisyworld::planet_model::{PlanetModel, PlanetProps};
use daisyworld::recorder::DataRecorder;
use daisyworld::report;
use daisyworld::DaisyColor;

fn run_and_record(
    mut model: PlanetModel,
    time_units: u64,
    output: &str,
) -> Result<(), String> {
    let cadence = PlanetModel::updates_per_time_unit();
    let mut recorder = DataRecorder::with_standard_fields(cadence);

    for _ in 0..(time_units * cadence) {
        model.update();
        recorder.tick(&model);
        report::report_progress(&model, cadence * 10);
    }

    recorder.write_csv_file(output)?;
    println!("Wrote {} ({} samples)", output, recorder.rows().len());
    println!("Final state: {}", report::model_summary(&model));
    Ok(())
}

fn main() -> Result<(), String> {
    // Black daisies only: expect about 15% cover with the planet in the
    // low thirties.
    let mut black_only = PlanetModel::new(PlanetProps {
        white: 0.0,
        black: 0.5,
        ..Default::default()
    });
    black_only.set_color_enabled(DaisyColor::White, false);
    println!("Black daisies only, luminosity 1.0");
    run_and_record(black_only, 100, "constant_luminosity_black.csv")?;

    // Both colors: expect black near 0.3, white near 0.4, planet near 22.
    println!("\nBlack and white daisies, luminosity 1.0");
    let both = PlanetModel::new(PlanetProps::default());
    run_and_record(both, 100, "constant_luminosity_black_and_white.csv")?;

    Ok(())
}
