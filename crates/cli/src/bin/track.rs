use std::path::PathBuf;

use clap::Parser;
use planet_position_calculator::body;
use planet_position_calculator::config::load_bodies;
use planet_position_calculator::epoch;
use planet_position_calculator::export::track as export_track;
use planet_position_calculator::time::seconds_to_days;
use planet_position_calculator::track::sample_period;

/// Sweep one orbital period and write position samples as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Orbit track CSV generator")]
struct Cli {
    /// Body name from the catalog (case-insensitive; defaults to the first entry)
    #[arg(long)]
    body: Option<String>,

    /// Sweep start epoch (defaults to the body's perihelion passage)
    #[arg(long)]
    start: Option<String>,

    /// Number of uniform steps across the period
    #[arg(long, default_value_t = 360)]
    samples: usize,

    /// Body catalog path (directory of TOML records or a YAML file)
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/track.csv")]
    output: PathBuf,

    /// Optional JSON summary sidecar path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = load_bodies(&cli.catalog)?;
    let record = body::select(&catalog, cli.body.as_deref())?;
    let elements = body::to_elements(record)?;

    let start = match &cli.start {
        Some(text) => epoch::parse_epoch(text)?,
        None => elements.perihelion_epoch(),
    };
    let points = sample_period(&elements, start, cli.samples)?;

    let mut writer = export_track::writer_for_path(&cli.output)?;
    export_track::write_header(writer.as_mut())?;
    for point in &points {
        let label = epoch::format_epoch(point.instant);
        export_track::Record {
            epoch_utc: &label,
            elapsed_days: seconds_to_days(point.elapsed_s),
            x_km: point.position.x_km,
            y_km: point.position.y_km,
            radius_km: point.position.radius_km(),
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(json_path) = &cli.json {
        let start_label = epoch::format_epoch(start);
        let summary = export_track::TrackSummary {
            body: &record.name,
            start_utc: &start_label,
            period_days: seconds_to_days(elements.orbital_period_s()),
            samples: points
                .iter()
                .map(|point| export_track::Sample {
                    elapsed_days: seconds_to_days(point.elapsed_s),
                    x_km: point.position.x_km,
                    y_km: point.position.y_km,
                    radius_km: point.position.radius_km(),
                })
                .collect(),
        };
        export_track::write_summary(json_path, &summary)?;
    }

    Ok(())
}
