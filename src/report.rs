//! Console reporting for interactive runs: a one-line model summary, a
//! periodic progress report, and a table view of sweep results.

use crate::ground_cover::DaisyColor;
use crate::planet_model::PlanetModel;
use crate::sweep::SweepSample;
use colored::Colorize;

/// Colors a temperature readout by habitability: blue when too cold for
/// growth, green inside the viable range, red when too hot.
pub fn format_temperature(temp_c: f64) -> String {
    let text = format!("{:6.2} C", temp_c);
    if temp_c < 7.5 {
        text.blue().to_string()
    } else if temp_c > 37.5 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

/// One-line summary of the current model state.
pub fn model_summary(model: &PlanetModel) -> String {
    let coverage: Vec<String> = DaisyColor::ALL
        .iter()
        .filter(|&&c| model.color_enabled(c))
        .map(|&c| format!("{} {:.3}", c.name(), model.proportion(c)))
        .collect();
    format!(
        "t={:8.2}  L={:.2}  T={}  albedo={:.3}  [{}]  ground {:.3}",
        model.time(),
        model.luminosity(),
        format_temperature(model.global_temperature()),
        model.global_albedo(),
        coverage.join(", "),
        model.proportion_of_ground(),
    )
}

/// Prints a summary every `every_updates` updates. Drivers call this after
/// each `update()`; off-cadence calls print nothing.
pub fn report_progress(model: &PlanetModel, every_updates: u64) {
    let every = every_updates.max(1);
    if model.updates() % every == 0 {
        println!("{}", model_summary(model));
    }
}

/// Prints sweep results as an aligned table.
pub fn print_sweep_table(title: &str, samples: &[SweepSample]) {
    println!("{}", title.bold());
    println!(
        "{:>10} {:>10} {:>8} {:>8} {:>8}",
        "luminosity", "temp", "white", "black", "gray"
    );
    for sample in samples {
        println!(
            "{:>10.2} {:>10} {:>8.3} {:>8.3} {:>8.3}",
            sample.luminosity,
            format_temperature(sample.temperature_c),
            sample.white,
            sample.black,
            sample.gray,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet_model::PlanetProps;

    #[test]
    fn test_summary_mentions_enabled_colors_only() {
        let mut model = PlanetModel::new(PlanetProps::default());
        model.set_color_enabled(DaisyColor::White, false);
        let summary = model_summary(&model);
        assert!(summary.contains("black"));
        assert!(!summary.contains("white"));
    }

    #[test]
    fn test_temperature_banding() {
        // The habitable band renders green, the extremes blue and red.
        assert!(format_temperature(22.5).contains("22.50"));
        assert_ne!(format_temperature(-10.0), format_temperature(60.0));
    }
}
