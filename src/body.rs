//! Catalog lookup and conversion of body records into runtime elements.

use helio_config::BodyConfig;
use helio_core::time::days_to_seconds;
use helio_orbits::{OrbitError, OrbitalElements};
use thiserror::Error;

use crate::epoch::{self, EpochError};

/// Errors surfaced when selecting or converting catalog bodies.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body '{0}' not found in catalog")]
    NotFound(String),
    #[error("body catalog is empty")]
    EmptyCatalog,
    #[error("perihelion epoch for '{name}' is invalid: {source}")]
    Epoch {
        name: String,
        #[source]
        source: EpochError,
    },
    #[error("orbital elements for '{name}' are invalid: {source}")]
    Elements {
        name: String,
        #[source]
        source: OrbitError,
    },
}

/// Select a body from the catalog by name (case-insensitive).
///
/// With no name requested, the first catalog entry is used.
pub fn select<'a>(
    catalog: &'a [BodyConfig],
    name: Option<&str>,
) -> Result<&'a BodyConfig, BodyError> {
    match name {
        Some(requested) => catalog
            .iter()
            .find(|body| body.name.eq_ignore_ascii_case(requested))
            .ok_or_else(|| BodyError::NotFound(requested.to_string())),
        None => catalog.first().ok_or(BodyError::EmptyCatalog),
    }
}

/// Convert a catalog record into validated `OrbitalElements`.
///
/// This is where range checking happens: the loader carries file values
/// verbatim, and a record with an unbound eccentricity, a non-positive axis
/// or period, or an unparseable epoch is rejected here.
pub fn to_elements(config: &BodyConfig) -> Result<OrbitalElements, BodyError> {
    let perihelion_epoch =
        epoch::parse_epoch(&config.perihelion_epoch).map_err(|source| BodyError::Epoch {
            name: config.name.clone(),
            source,
        })?;
    OrbitalElements::new(
        config.semi_major_axis_km,
        config.eccentricity,
        days_to_seconds(config.orbital_period_days),
        perihelion_epoch,
    )
    .map_err(|source| BodyError::Elements {
        name: config.name.clone(),
        source,
    })
}
