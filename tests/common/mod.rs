#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use camino::Utf8Path;
use vsop_ephem::{
    coefficient_source::Vsop87Directory, constants::DPI, coordinates::EclipticPosition,
    planet::Planet,
};

/// Directory of the genuine VSOP87B files, named by the `VSOP87` variable.
pub fn vsop87_directory() -> Vsop87Directory {
    Vsop87Directory::from_env().expect("VSOP87 must name the VSOP87B directory")
}

pub fn header(planet: Planet, variable: u8, power: u8, count: usize) -> String {
    format!(
        " VSOP87 VERSION B{}    {:<7}   VARIABLE {variable} (LBR)       *T**{power} {count:>6} TERMS    HIGH PRECISION",
        u8::from(planet) + 1,
        planet.name().to_uppercase(),
    )
}

pub fn term(planet: Planet, variable: u8, power: u8, rank: usize, a: f64, b: f64, c: f64) -> String {
    format!(
        " 2{}{variable}{power}{rank:>5}{}{:>15.11}{:>18.11}{a:>18.11}{b:>14.11}{c:>20.11}",
        u8::from(planet) + 1,
        "  0".repeat(12),
        0.0,
        0.0,
    )
}

/// A small but complete table: circular orbit of radius `range` with a mean motion of
/// `mean_motion` rad per millennium and a small latitude oscillation.
pub fn synthetic_table(planet: Planet, range: f64, mean_motion: f64) -> String {
    [
        header(planet, 1, 0, 2),
        term(planet, 1, 0, 1, 1.25, 0.0, 0.0),
        term(planet, 1, 0, 2, 0.001, 0.5, mean_motion),
        header(planet, 1, 1, 1),
        term(planet, 1, 1, 1, mean_motion, 0.0, 0.0),
        header(planet, 2, 0, 1),
        term(planet, 2, 0, 1, 0.02, 1.0, mean_motion),
        header(planet, 3, 0, 2),
        term(planet, 3, 0, 1, range, 0.0, 0.0),
        term(planet, 3, 0, 2, 0.0001, 2.0, mean_motion),
    ]
    .join("\n")
}

pub fn write_synthetic_table(dir: &Utf8Path, planet: Planet, range: f64, mean_motion: f64) {
    std::fs::write(
        dir.join(planet.vsop87b_file_name()),
        synthetic_table(planet, range, mean_motion),
    )
    .unwrap();
}

pub fn assert_position_close(actual: &EclipticPosition, expected: &EclipticPosition, epsilon: f64) {
    let dlon = (actual.lon - expected.lon + std::f64::consts::PI).rem_euclid(DPI)
        - std::f64::consts::PI;
    assert_abs_diff_eq!(dlon, 0.0, epsilon = epsilon);
    assert_abs_diff_eq!(actual.lat, expected.lat, epsilon = epsilon);
    assert_abs_diff_eq!(actual.range, expected.range, epsilon = epsilon);
}
