//! # FK5 frame correction
//!
//! VSOP87 positions are referred to the dynamical ecliptic and equinox. Meeus
//! (*Astronomical Algorithms*, formula 32.3) gives the small correction carrying them
//! to the FK5 system:
//!
//! ```text
//! L' = L − 1.397°·T − 0.00031°·T²
//! ΔL = −0.09033″ + 0.03916″·(cos L' + sin L')·tan B
//! ΔB = +0.03916″·(cos L' − sin L')
//! ```
//!
//! with `T` in Julian centuries from J2000.0. The correction is a fraction of an
//! arcsecond and is never applied implicitly by the position engine.
use crate::{
    constants::{Radian, JDE, RADEG, RADSEC},
    time::julian_centuries,
};

/// Convert an ecliptic position from the VSOP87 dynamical frame to FK5.
///
/// Arguments
/// ---------
/// * `lon`: ecliptic longitude in radians (dynamical frame)
/// * `lat`: ecliptic latitude in radians (dynamical frame)
/// * `jde`: Julian Ephemeris Day of the position
///
/// Return
/// ------
/// * `(lon + ΔL, lat + ΔB)`. The longitude is not renormalized.
pub fn to_fk5(lon: Radian, lat: Radian, jde: JDE) -> (Radian, Radian) {
    let t = julian_centuries(jde);
    let lon_p = lon - (1.397 + 0.00031 * t) * t * RADEG;
    let (sin_lp, cos_lp) = lon_p.sin_cos();

    let delta_lon = (-0.09033 + 0.03916 * (cos_lp + sin_lp) * lat.tan()) * RADSEC;
    let delta_lat = 0.03916 * (cos_lp - sin_lp) * RADSEC;

    (lon + delta_lon, lat + delta_lat)
}

#[cfg(test)]
mod fk5_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_venus_1992() {
        let lon = 26.11428 * RADEG;
        let lat = -2.62070 * RADEG;

        let (lon_fk5, lat_fk5) = to_fk5(lon, lat, 2448976.5);
        assert_abs_diff_eq!(
            lon_fk5 - lon,
            -0.09272980946474263 * RADSEC,
            epsilon = 1e-14
        );
        assert_abs_diff_eq!(
            lat_fk5 - lat,
            0.017835814196004395 * RADSEC,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_correction_is_small() {
        for jde in [2415020.0, 2448976.5, 2451545.0, 2488070.0] {
            for lon in [0.0, 1.0, 2.5, 4.0, 6.0] {
                for lat in [-0.1, 0.0, 0.05] {
                    let (l, b) = to_fk5(lon, lat, jde);
                    assert!((l - lon).abs() < 1e-4);
                    assert!((b - lat).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_on_ecliptic_at_j2000() {
        let (l, b) = to_fk5(0.0, 0.0, 2451545.0);
        assert_eq!(l, -0.09033 * RADSEC);
        assert_eq!(b, 0.03916 * RADSEC);
    }
}
