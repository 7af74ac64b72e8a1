//! Time-series recording for simulation runs.
//!
//! A driver registers named field queries and a sampling cadence, then calls
//! `tick` after every completed `update()`. Because ticks only ever run
//! between updates, every sampled row is consistent with a single fully
//! applied step.

use crate::ground_cover::DaisyColor;
use crate::planet_model::PlanetModel;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

type FieldQuery = Box<dyn Fn(&PlanetModel) -> f64>;

pub struct DataRecorder {
    fields: Vec<(String, FieldQuery)>,
    sample_every: u64,
    rows: Vec<Vec<f64>>,
}

impl DataRecorder {
    /// Creates a recorder that samples once every `sample_every` updates.
    /// A cadence of 0 is treated as 1.
    pub fn new(sample_every: u64) -> DataRecorder {
        DataRecorder {
            fields: Vec::new(),
            sample_every: sample_every.max(1),
            rows: Vec::new(),
        }
    }

    /// Creates a recorder preloaded with the usual run fields: time,
    /// luminosity, per-color proportions, and global temperature.
    pub fn with_standard_fields(sample_every: u64) -> DataRecorder {
        let mut recorder = DataRecorder::new(sample_every);
        recorder.register_field("time", |m| m.time());
        recorder.register_field("luminosity", |m| m.luminosity());
        for color in DaisyColor::ALL {
            recorder.register_field(color.name(), move |m| m.proportion(color));
        }
        recorder.register_field("temperature", |m| m.global_temperature());
        recorder
    }

    /// Adds the round-mode habitat statistics for every color. Sparse or
    /// absent colors record NaN, which serializes as `NaN` in the CSV and
    /// must not be read as zero.
    pub fn register_latitude_fields(&mut self) {
        for color in DaisyColor::ALL {
            self.register_field(format!("{}_min_lat", color.name()), move |m| {
                m.min_latitude(color).map_or(f64::NAN, |lat| lat as f64)
            });
            self.register_field(format!("{}_mean_lat", color.name()), move |m| {
                m.average_latitude(color).unwrap_or(f64::NAN)
            });
            self.register_field(format!("{}_max_lat", color.name()), move |m| {
                m.max_latitude(color).map_or(f64::NAN, |lat| lat as f64)
            });
        }
    }

    pub fn register_field<N, F>(&mut self, name: N, query: F)
    where
        N: Into<String>,
        F: Fn(&PlanetModel) -> f64 + 'static,
    {
        self.fields.push((name.into(), Box::new(query)));
    }

    /// Samples the model if its update counter has reached the cadence.
    /// Returns true when a row was appended.
    pub fn tick(&mut self, model: &PlanetModel) -> bool {
        if model.updates() % self.sample_every != 0 {
            return false;
        }
        self.sample(model);
        true
    }

    /// Samples the model unconditionally.
    pub fn sample(&mut self, model: &PlanetModel) {
        let row = self.fields.iter().map(|(_, query)| query(model)).collect();
        self.rows.push(row);
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Writes header and rows as CSV.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.field_names().join(","))?;
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(writer, "{}", line.join(","))?;
        }
        Ok(())
    }

    /// Writes the recorded series to a CSV file.
    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let file = File::create(path.as_ref())
            .map_err(|e| format!("Failed to create {}: {}", path.as_ref().display(), e))?;
        let mut writer = BufWriter::new(file);
        self.write_csv(&mut writer)
            .map_err(|e| format!("Failed to write {}: {}", path.as_ref().display(), e))
    }
}
