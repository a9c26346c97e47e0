//! # VSOP87 periodic series
//!
//! A VSOP87 coordinate (longitude, latitude or radius vector) is a polynomial in time
//! whose coefficients are themselves sums of periodic terms:
//!
//! ```text
//! X(τ) = Σₙ τⁿ · Σₖ Aₙₖ · cos(Bₙₖ + Cₙₖ · τ)
//! ```
//!
//! where `τ` is the time in Julian millennia from J2000.0 (TDB).
//!
//! ## Structure
//!
//! ```text
//! PlanetCoefficients
//! ├── longitude (CoordinateSeries)
//! │   ├── τ⁰ (CoefficientSeries) ── [Term { a, b, c }, ...]
//! │   ├── τ¹ (CoefficientSeries)
//! │   └── ...
//! ├── latitude  (CoordinateSeries)
//! └── radius    (CoordinateSeries)
//! ```
//!
//! ## Numerical notes
//!
//! - The terms of a series are stored by decreasing amplitude, as distributed by the IMCCE.
//!   They are summed from the **smallest to the largest** to limit the rounding error.
//! - The per-power sums are combined with **Horner's scheme**, from the highest power down.
//! - Nothing is validated during evaluation: a degenerate set evaluates to `0.0`,
//!   and NaN/∞ coefficients propagate to the result.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{planet::Planet, vsop_errors::VsopError};

/// One periodic term `A · cos(B + C · τ)`.
///
/// * `a` – amplitude (radians for angles, AU for the radius vector)
/// * `b` – phase (radians)
/// * `c` – frequency (radians per Julian millennium)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Term {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Term { a, b, c }
    }

    #[inline]
    pub fn value(&self, tau: f64) -> f64 {
        self.a * (self.b + self.c * tau).cos()
    }
}

/// The periodic terms multiplying one power of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientSeries(Vec<Term>);

impl CoefficientSeries {
    pub fn new(terms: Vec<Term>) -> Self {
        CoefficientSeries(terms)
    }

    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all the terms at `tau`, accumulated in reverse storage order.
    #[inline]
    pub fn sum(&self, tau: f64) -> f64 {
        self.0.iter().rev().map(|term| term.value(tau)).sum()
    }
}

impl From<Vec<Term>> for CoefficientSeries {
    fn from(terms: Vec<Term>) -> Self {
        CoefficientSeries(terms)
    }
}

/// A full coordinate: one [`CoefficientSeries`] per power of time, index `n` ↔ `τⁿ`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateSeries(Vec<CoefficientSeries>);

impl CoordinateSeries {
    pub fn new(powers: Vec<CoefficientSeries>) -> Self {
        CoordinateSeries(powers)
    }

    /// Per-power series, ordered by ascending power of time.
    pub fn powers(&self) -> &[CoefficientSeries] {
        &self.0
    }

    /// Total number of periodic terms over all powers.
    pub fn term_count(&self) -> usize {
        self.0.iter().map(CoefficientSeries::len).sum()
    }

    /// Evaluate the coordinate at `tau` Julian millennia from J2000.0.
    ///
    /// Arguments
    /// ---------
    /// * `tau`: time argument in Julian millennia (TDB) from J2000.0. It is not bounded;
    ///   outside of a few millennia the truncated theory degrades but still returns a value.
    ///
    /// Return
    /// ------
    /// * `Σₙ sumₙ(τ) · τⁿ` evaluated as `(…(sum_N·τ + sum_N-1)·τ + …)·τ + sum_0`.
    ///   An empty set returns `0.0`.
    pub fn evaluate(&self, tau: f64) -> f64 {
        self.0
            .iter()
            .rev()
            .fold(0.0, |acc, series| acc * tau + series.sum(tau))
    }
}

impl From<Vec<CoefficientSeries>> for CoordinateSeries {
    fn from(powers: Vec<CoefficientSeries>) -> Self {
        CoordinateSeries(powers)
    }
}

/// The three spherical heliocentric coordinates of a VSOP87B table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coordinate {
    Longitude,
    Latitude,
    Radius,
}

impl Coordinate {
    pub const ALL: [Coordinate; 3] = [
        Coordinate::Longitude,
        Coordinate::Latitude,
        Coordinate::Radius,
    ];

    /// Map the VSOP87 variable index (`1` = L, `2` = B, `3` = R).
    pub fn from_vsop_variable(index: u8) -> Option<Self> {
        match index {
            1 => Some(Coordinate::Longitude),
            2 => Some(Coordinate::Latitude),
            3 => Some(Coordinate::Radius),
            _ => None,
        }
    }

    pub fn vsop_variable(&self) -> u8 {
        match self {
            Coordinate::Longitude => 1,
            Coordinate::Latitude => 2,
            Coordinate::Radius => 3,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Longitude => f.write_str("longitude"),
            Coordinate::Latitude => f.write_str("latitude"),
            Coordinate::Radius => f.write_str("radius"),
        }
    }
}

/// Complete VSOP87B coefficient set of one planet.
///
/// Built once by a loader and never mutated afterwards; the
/// [`PlanetPosition`](crate::planet_position::PlanetPosition) engine owns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCoefficients {
    planet: Planet,
    longitude: CoordinateSeries,
    latitude: CoordinateSeries,
    radius: CoordinateSeries,
}

impl PlanetCoefficients {
    pub fn new(
        planet: Planet,
        longitude: CoordinateSeries,
        latitude: CoordinateSeries,
        radius: CoordinateSeries,
    ) -> Self {
        PlanetCoefficients {
            planet,
            longitude,
            latitude,
            radius,
        }
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn coordinate(&self, coordinate: Coordinate) -> &CoordinateSeries {
        match coordinate {
            Coordinate::Longitude => &self.longitude,
            Coordinate::Latitude => &self.latitude,
            Coordinate::Radius => &self.radius,
        }
    }

    pub fn longitude(&self) -> &CoordinateSeries {
        &self.longitude
    }

    pub fn latitude(&self) -> &CoordinateSeries {
        &self.latitude
    }

    pub fn radius(&self) -> &CoordinateSeries {
        &self.radius
    }

    pub fn term_count(&self) -> usize {
        Coordinate::ALL
            .iter()
            .map(|c| self.coordinate(*c).term_count())
            .sum()
    }

    /// Structural check performed at load time.
    ///
    /// Every coordinate must hold at least one periodic term; an empty coordinate
    /// would silently evaluate to zero and is reported as
    /// [`VsopError::MissingCoordinate`] instead.
    pub fn validate(&self) -> Result<(), VsopError> {
        match Coordinate::ALL
            .into_iter()
            .find(|c| self.coordinate(*c).term_count() == 0)
        {
            Some(coordinate) => Err(VsopError::MissingCoordinate {
                planet: self.planet,
                coordinate,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod series_test {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_coordinate() -> CoordinateSeries {
        CoordinateSeries::new(vec![
            CoefficientSeries::new(vec![
                Term::new(4.0, 0.0, 0.0),
                Term::new(0.25, 1.5, 2.0),
                Term::new(0.01, -0.5, 10.0),
            ]),
            CoefficientSeries::new(vec![Term::new(3.0, 0.0, 0.0), Term::new(0.1, 0.3, 5.0)]),
            CoefficientSeries::new(vec![Term::new(0.02, 2.0, 1.0)]),
        ])
    }

    #[test]
    fn test_term_value() {
        let term = Term::new(2.0, 0.5, 3.0);
        assert_eq!(term.value(0.0), 2.0 * 0.5_f64.cos());
        assert_eq!(term.value(0.1), 2.0 * (0.5_f64 + 3.0 * 0.1).cos());
    }

    #[test]
    fn test_series_sum_reverse_order() {
        let series = CoefficientSeries::new(vec![
            Term::new(1.0, 0.0, 0.0),
            Term::new(1e-16, 0.0, 0.0),
            Term::new(1e-16, 0.0, 0.0),
        ]);
        // summing the small terms first keeps them from vanishing against 1.0
        assert_eq!(series.sum(0.0), 1.0 + 2e-16);
        assert!(series.sum(0.0) > 1.0);
    }

    #[test]
    fn test_evaluate_at_epoch_uses_constant_power_only() {
        let coordinate = sample_coordinate();
        let expected = 0.01 * (-0.5_f64).cos() + 0.25 * 1.5_f64.cos() + 4.0;
        assert_eq!(coordinate.evaluate(0.0), expected);
    }

    #[test]
    fn test_evaluate_polynomial_in_time() {
        let coordinate = sample_coordinate();
        let tau = 0.37;

        let direct: f64 = coordinate
            .powers()
            .iter()
            .enumerate()
            .map(|(n, series)| series.sum(tau) * tau.powi(n as i32))
            .sum();

        assert_relative_eq!(coordinate.evaluate(tau), direct, epsilon = 1e-13);

        let horner = (0.02 * (2.0_f64 + tau).cos() * tau
            + (0.1 * (0.3_f64 + 5.0 * tau).cos() + 3.0))
            * tau
            + (0.01 * (-0.5_f64 + 10.0 * tau).cos() + 0.25 * (1.5_f64 + 2.0 * tau).cos() + 4.0);
        assert_eq!(coordinate.evaluate(tau), horner);
    }

    #[test]
    fn test_evaluate_degenerate_sets() {
        assert_eq!(CoordinateSeries::default().evaluate(1.5), 0.0);

        let only_empty = CoordinateSeries::new(vec![
            CoefficientSeries::default(),
            CoefficientSeries::default(),
        ]);
        assert_eq!(only_empty.evaluate(-3.0), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let coordinate =
            CoordinateSeries::new(vec![CoefficientSeries::new(vec![Term::new(f64::NAN, 0.0, 0.0)])]);
        assert!(coordinate.evaluate(0.1).is_nan());
    }

    #[test]
    fn test_validate() {
        let full = PlanetCoefficients::new(
            Planet::Mars,
            sample_coordinate(),
            sample_coordinate(),
            sample_coordinate(),
        );
        assert_eq!(full.validate(), Ok(()));
        assert_eq!(full.term_count(), 18);

        let missing = PlanetCoefficients::new(
            Planet::Mars,
            sample_coordinate(),
            CoordinateSeries::new(vec![CoefficientSeries::default()]),
            sample_coordinate(),
        );
        assert_eq!(
            missing.validate(),
            Err(VsopError::MissingCoordinate {
                planet: Planet::Mars,
                coordinate: Coordinate::Latitude
            })
        );
    }

    #[test]
    fn test_vsop_variable_mapping() {
        for coordinate in Coordinate::ALL {
            assert_eq!(
                Coordinate::from_vsop_variable(coordinate.vsop_variable()),
                Some(coordinate)
            );
        }
        assert_eq!(Coordinate::from_vsop_variable(0), None);
        assert_eq!(Coordinate::from_vsop_variable(4), None);
    }
}
