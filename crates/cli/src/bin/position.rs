use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use planet_position_calculator::body;
use planet_position_calculator::config::load_bodies;
use planet_position_calculator::epoch;
use planet_position_calculator::orbits::position_at;
use planet_position_calculator::time::seconds_to_days;
use planet_position_calculator::units::km_to_au;

/// Compute the heliocentric in-plane position of a catalog body at an instant.
#[derive(Parser, Debug)]
#[command(author, version, about = "Heliocentric planar position calculator")]
struct Cli {
    /// Body name from the catalog (case-insensitive; defaults to the first entry)
    #[arg(long)]
    body: Option<String>,

    /// Evaluation epoch (RFC 3339 or "YYYY-MM-DD HH:MM:SS" UTC; defaults to now)
    #[arg(long)]
    epoch: Option<String>,

    /// Body catalog path (directory of TOML records or a YAML file)
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = load_bodies(&cli.catalog)?;
    let record = body::select(&catalog, cli.body.as_deref())?;
    let elements = body::to_elements(record)?;

    let instant = match &cli.epoch {
        Some(text) => epoch::parse_epoch(text)?,
        None => Utc::now(),
    };
    let position = position_at(&elements, instant)?;

    let elapsed_s = epoch::elapsed_seconds(elements.perihelion_epoch(), instant);
    let radius_km = position.radius_km();

    println!("=== Heliocentric Position ===");
    println!("Body       : {}", record.name);
    println!("Epoch      : {}", epoch::format_epoch(instant));
    println!(
        "Perihelion : {} ({:+.3} days elapsed)",
        epoch::format_epoch(elements.perihelion_epoch()),
        seconds_to_days(elapsed_s)
    );
    println!(
        "Position   : x = {:.1} km, y = {:.1} km",
        position.x_km, position.y_km
    );
    println!(
        "Radius     : {:.1} km ({:.6} AU)",
        radius_km,
        km_to_au(radius_km)
    );

    Ok(())
}
