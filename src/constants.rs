//! # Constants and type definitions for vsop_ephem
//!
//! This module centralizes the **time scales**, **conversion factors**, and **type aliases**
//! shared by the series evaluator, the position engine and the frame transforms.
//!
//! ## Overview
//!
//! - Reference epoch J2000.0 and the Julian century / millennium lengths
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians)
//! - Names used to locate the VSOP87 coefficient files

// -------------------------------------------------------------------------------------------------
// Time constants
// -------------------------------------------------------------------------------------------------

/// Julian Ephemeris Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian millennium, the time unit of the VSOP87 series
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

// -------------------------------------------------------------------------------------------------
// Angles and distances
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Cosine of 10 arcminutes; above it `asin` loses accuracy and latitudes are
/// recovered from the equatorial components instead.
pub const COS_SMALL_ANGLE: f64 = 0.999_995_769_205_486_3;

// -------------------------------------------------------------------------------------------------
// Coefficient files
// -------------------------------------------------------------------------------------------------

/// Environment variable naming the directory that holds the `VSOP87B.*` files
pub const VSOP87_ENV_VAR: &str = "VSOP87";

/// Common prefix of the heliocentric spherical J2000 coefficient files
pub const VSOP87B_FILE_PREFIX: &str = "VSOP87B";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Ephemeris Day (days, TT/TDB)
pub type JDE = f64;

#[cfg(test)]
mod constants_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cos_small_angle() {
        let ten_arcmin = 10.0 * 60.0 * RADSEC;
        assert_relative_eq!(COS_SMALL_ANGLE, ten_arcmin.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_millennium_is_ten_centuries() {
        assert_eq!(DAYS_PER_JULIAN_MILLENNIUM, 10.0 * DAYS_PER_JULIAN_CENTURY);
        assert_eq!(DAYS_PER_JULIAN_CENTURY, 100.0 * DAYS_PER_JULIAN_YEAR);
    }
}
