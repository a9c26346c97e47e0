//! # Load-time errors
//!
//! Every variant of [`VsopError`] means the same thing to a caller: the coefficient
//! table of a planet is **unavailable** (missing, unreadable, or structurally invalid).
//! The variants only refine the reason for diagnostics. Evaluation of a loaded
//! [`PlanetPosition`](crate::planet_position::PlanetPosition) never fails.
use thiserror::Error;

use crate::{planet::Planet, series::Coordinate};

#[derive(Error, Debug)]
pub enum VsopError {
    #[error("Invalid planet identifier: {0}")]
    InvalidPlanet(String),

    #[error("Invalid coefficient data source: {0}")]
    InvalidDataSource(String),

    #[error("Environment variable {0} is not set; it must name the VSOP87 data directory")]
    MissingEnvironmentVariable(String),

    #[error("VSOP87 coefficient file not found at: {0}")]
    CoefficientFileNotFound(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("UTF-8 Path error: {0}")]
    Utf8PathError(String),

    #[error("Cache dir creation error for VSOP87 files: {0}")]
    UnableToCreateCacheDir(String),

    #[cfg(feature = "vsop-download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("No coefficient table available for {0}")]
    PlanetNotAvailable(Planet),

    #[error("Coefficient table holds {found} instead of the requested {expected}")]
    PlanetMismatch { expected: Planet, found: Planet },

    #[error("Malformed VSOP87 table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    #[error("Coefficient table of {planet} has no {coordinate} series")]
    MissingCoordinate { planet: Planet, coordinate: Coordinate },
}

impl VsopError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        VsopError::MalformedTable {
            line,
            reason: reason.into(),
        }
    }
}

impl PartialEq for VsopError {
    fn eq(&self, other: &Self) -> bool {
        use VsopError::*;
        match (self, other) {
            (InvalidPlanet(a), InvalidPlanet(b)) => a == b,
            (InvalidDataSource(a), InvalidDataSource(b)) => a == b,
            (MissingEnvironmentVariable(a), MissingEnvironmentVariable(b)) => a == b,
            (CoefficientFileNotFound(a), CoefficientFileNotFound(b)) => a == b,

            // not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            #[cfg(feature = "vsop-download")]
            (ReqwestError(_), ReqwestError(_)) => true,

            (Utf8PathError(a), Utf8PathError(b)) => a == b,
            (UnableToCreateCacheDir(a), UnableToCreateCacheDir(b)) => a == b,
            (PlanetNotAvailable(a), PlanetNotAvailable(b)) => a == b,
            (
                PlanetMismatch {
                    expected: e1,
                    found: f1,
                },
                PlanetMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (
                MalformedTable {
                    line: l1,
                    reason: r1,
                },
                MalformedTable {
                    line: l2,
                    reason: r2,
                },
            ) => l1 == l2 && r1 == r2,
            (
                MissingCoordinate {
                    planet: p1,
                    coordinate: c1,
                },
                MissingCoordinate {
                    planet: p2,
                    coordinate: c2,
                },
            ) => p1 == p2 && c1 == c2,

            _ => false,
        }
    }
}

#[cfg(test)]
mod vsop_errors_test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VsopError::malformed(12, "expected 3 terms");
        assert_eq!(
            err.to_string(),
            "Malformed VSOP87 table at line 12: expected 3 terms"
        );

        let err = VsopError::MissingCoordinate {
            planet: Planet::Mars,
            coordinate: Coordinate::Radius,
        };
        assert_eq!(
            err.to_string(),
            "Coefficient table of Mars has no radius series"
        );
    }

    #[test]
    fn test_io_errors_compare_by_variant() {
        let a: VsopError = std::io::Error::new(std::io::ErrorKind::NotFound, "a").into();
        let b: VsopError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "b").into();
        assert_eq!(a, b);
        assert_ne!(a, VsopError::CoefficientFileNotFound("a".into()));
    }
}
