//! Body catalog models and loaders for the planet position calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Orbital-element record for one body, parsed from catalog manifests.
///
/// Values are carried verbatim from the file; range validation happens when
/// the record is converted into runtime elements, so a catalog can be loaded
/// and inspected even if one entry is bad.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub orbital_period_days: f64,
    /// Perihelion passage instant, RFC 3339 or `YYYY-MM-DD[ HH:MM:SS]` UTC.
    pub perihelion_epoch: String,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body records from a catalog path.
///
/// Accepts a directory of per-body `.toml` records (read in sorted order),
/// a single `.toml` record file, or a YAML file holding a list of records.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, CatalogError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: BodyConfig = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records(dir: &Path) -> Result<Vec<BodyConfig>, CatalogError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: BodyConfig = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
