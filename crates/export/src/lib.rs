//! Export helpers for CSV and JSON orbit-track artifacts.

pub mod track {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    const HEADER: &str = "epoch_utc,elapsed_days,x_km,y_km,radius_km";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard track CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the track exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub epoch_utc: &'a str,
        pub elapsed_days: f64,
        pub x_km: f64,
        pub y_km: f64,
        pub radius_km: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{:.3},{:.3},{:.3}",
                self.epoch_utc, self.elapsed_days, self.x_km, self.y_km, self.radius_km,
            )
        }
    }

    /// Position sample used in exported JSON summaries.
    #[derive(Debug, Clone, Serialize)]
    pub struct Sample {
        pub elapsed_days: f64,
        pub x_km: f64,
        pub y_km: f64,
        pub radius_km: f64,
    }

    /// Envelope of a sampled orbit track.
    #[derive(Debug, Serialize)]
    pub struct TrackSummary<'a> {
        pub body: &'a str,
        pub start_utc: &'a str,
        pub period_days: f64,
        pub samples: Vec<Sample>,
    }

    /// Write a JSON track summary next to (or instead of) the CSV artifact.
    pub fn write_summary(path: &Path, summary: &TrackSummary<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
