//! Heliocentric planar position calculator.
//!
//! Answers "where is the body, in kilometres, relative to the focus of its
//! ellipse, at time t?" for a single-body Keplerian orbit. The numerical
//! pipeline lives in [`helio_orbits`]; this crate wires it to body catalogs,
//! calendar epochs, and track sampling so multiple front-ends (CLI, library
//! consumers) can share it.

pub mod body;
pub mod epoch;
pub mod track;

pub use helio_config as config;
pub use helio_core::{angles, constants, time, units};
pub use helio_export as export;
pub use helio_orbits as orbits;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
