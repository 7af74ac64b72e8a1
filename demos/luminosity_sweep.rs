//! Rising-and-falling luminosity experiments, one per daisy mix, matching
//! graphs (a) through (d) of the Daisyworld paper. Each sweep writes its
//! equilibria to a CSV and prints a summary table.

use daisyworld::planet_model::{PlanetModel, PlanetProps};
use daisyworld::report;
use daisyworld::sweep::{LuminositySweep, SweepParams, SweepSample};
use daisyworld::DaisyColor;
use std::fs::File;
use std::io::{BufWriter, Write};

fn write_samples(path: &str, rising: &[SweepSample], falling: &[SweepSample]) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Failed to create {}: {}", path, e))?;
    let mut writer = BufWriter::new(file);
    (|| -> std::io::Result<()> {
        writeln!(writer, "direction,luminosity,temperature,white,black,gray")?;
        for (direction, samples) in [("rising", rising), ("falling", falling)] {
            for s in samples {
                writeln!(
                    writer,
                    "{},{},{},{},{},{}",
                    direction, s.luminosity, s.temperature_c, s.white, s.black, s.gray
                )?;
            }
        }
        Ok(())
    })()
    .map_err(|e| format!("Failed to write {}: {}", path, e))
}

fn sweep_with_mix(
    white_enabled: bool,
    black_enabled: bool,
    title: &str,
    output: &str,
) -> Result<(), String> {
    let mut model = PlanetModel::new(PlanetProps {
        white: if white_enabled { 0.5 } else { 0.0 },
        black: if black_enabled { 0.5 } else { 0.0 },
        luminosity: 0.5,
        ..Default::default()
    });
    model.set_color_enabled(DaisyColor::White, white_enabled);
    model.set_color_enabled(DaisyColor::Black, black_enabled);

    let has_daisies = white_enabled || black_enabled;
    let sweep = LuminositySweep::new(SweepParams {
        time_per_step: 50.0,
        boost_between_steps: has_daisies,
        ..Default::default()
    });
    let (rising, falling) = sweep.run_hysteresis(&mut model);

    report::print_sweep_table(&format!("{} (rising)", title), &rising);
    write_samples(output, &rising, &falling)?;
    println!("Wrote {}\n", output);
    Ok(())
}

fn main() -> Result<(), String> {
    sweep_with_mix(false, false, "No daisies (control)", "no_daisies.csv")?;
    sweep_with_mix(false, true, "Black daisies only", "black.csv")?;
    sweep_with_mix(true, false, "White daisies only", "white.csv")?;
    sweep_with_mix(true, true, "Black and white daisies", "black_and_white.csv")?;
    Ok(())
}
