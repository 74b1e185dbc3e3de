use std::fs;
use std::io::Write;

use planet_position_calculator::body::{self, BodyError};
use planet_position_calculator::config::load_bodies;
use planet_position_calculator::epoch::parse_epoch;
use planet_position_calculator::orbits::OrbitError;

#[test]
fn shipped_catalog_loads_and_converts() {
    let catalog = load_bodies("configs/bodies").expect("shipped catalog");
    assert!(catalog.len() >= 2, "expected Earth and Mars records");

    let earth = body::select(&catalog, Some("earth")).expect("earth record");
    let elements = body::to_elements(earth).expect("earth elements");

    assert_eq!(elements.semi_major_axis_km(), 149_597_870.7);
    assert_eq!(elements.eccentricity(), 0.0167);
    assert!((elements.orbital_period_s() - 365.256363004 * 86_400.0).abs() < 1e-3);
    assert_eq!(
        elements.perihelion_epoch(),
        parse_epoch("2025-01-04T13:28:00Z").expect("epoch")
    );
}

#[test]
fn selection_is_case_insensitive_and_defaults_to_first() {
    let catalog = load_bodies("configs/bodies").expect("shipped catalog");

    let mars = body::select(&catalog, Some("MARS")).expect("mars record");
    assert_eq!(mars.name, "Mars");

    // Directory records load in sorted order, so Earth comes first.
    let first = body::select(&catalog, None).expect("default record");
    assert_eq!(first.name, "Earth");

    let missing = body::select(&catalog, Some("pluto")).expect_err("unknown body");
    assert!(matches!(missing, BodyError::NotFound(name) if name == "pluto"));

    let empty = body::select(&[], None).expect_err("empty catalog");
    assert!(matches!(empty, BodyError::EmptyCatalog));
}

#[test]
fn yaml_catalog_files_are_supported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    let mut file = fs::File::create(&path).expect("yaml create");
    writeln!(
        file,
        "- name: Venus\n  semi_major_axis_km: 108208000.0\n  eccentricity: 0.0068\n  orbital_period_days: 224.701\n  perihelion_epoch: \"2025-02-10T00:00:00Z\"\n- name: Earth\n  semi_major_axis_km: 149597870.7\n  eccentricity: 0.0167\n  orbital_period_days: 365.256363004\n  perihelion_epoch: \"2025-01-04T13:28:00Z\""
    )
    .expect("yaml write");

    let catalog = load_bodies(&path).expect("yaml catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Venus");
}

#[test]
fn out_of_range_records_are_rejected_at_conversion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hyperbolic.toml");
    fs::write(
        &path,
        "name = \"Oumuamua\"\nsemi_major_axis_km = 200000000.0\neccentricity = 1.2\norbital_period_days = 400.0\nperihelion_epoch = \"2017-09-09T00:00:00Z\"\n",
    )
    .expect("toml write");

    // The loader carries values verbatim; conversion applies the range checks.
    let catalog = load_bodies(&path).expect("record still loads");
    let err = body::to_elements(&catalog[0]).expect_err("hyperbolic orbit");
    assert!(matches!(
        err,
        BodyError::Elements {
            source: OrbitError::EccentricityOutOfRange(_),
            ..
        }
    ));
}

#[test]
fn unparseable_epochs_are_rejected_at_conversion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad_epoch.toml");
    fs::write(
        &path,
        "name = \"Nowhere\"\nsemi_major_axis_km = 1.0\neccentricity = 0.1\norbital_period_days = 1.0\nperihelion_epoch = \"perihelion o'clock\"\n",
    )
    .expect("toml write");

    let catalog = load_bodies(&path).expect("record still loads");
    let err = body::to_elements(&catalog[0]).expect_err("bad epoch");
    assert!(matches!(err, BodyError::Epoch { .. }));
}
