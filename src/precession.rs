//! # Precession of ecliptic coordinates
//!
//! Rigorous reduction of ecliptic longitude and latitude from the mean ecliptic and
//! equinox of one epoch to those of another (Lieske 1977 angles, in the form given by
//! Meeus, *Astronomical Algorithms*, 21.5 and 21.7).
//!
//! With `T` the Julian centuries from J2000.0 to the starting epoch and `t` the Julian
//! centuries from the starting epoch to the final one:
//!
//! ```text
//! η = (47.0029″ − 0.06603″T + 0.000598″T²)t + (−0.03302″ + 0.000598″T)t² + 0.000060″t³
//! Π = 174.876384° + 3289.4789″T + 0.60622″T² − (869.8089″ + 0.50491″T)t + 0.03536″t²
//! p = (5029.0966″ + 2.22226″T − 0.000042″T²)t + (1.11113″ − 0.000042″T)t² − 0.000006″t³
//! ```
//!
//! The position engine uses it to carry the J2000 coordinates of the VSOP87B tables to
//! the mean ecliptic and equinox of the requested date.
use crate::{
    constants::{Radian, COS_SMALL_ANGLE, DAYS_PER_JULIAN_CENTURY, J2000_JD, JDE, RADEG, RADSEC},
    coordinates::principal_angle,
    time::julian_centuries,
};

/// Precession angles between two fixed epochs.
///
/// The angles only depend on the two epochs, so one precessor can reduce any number of
/// positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPrecessor {
    sin_eta: f64,
    cos_eta: f64,
    pi: Radian,
    p: Radian,
}

impl EclipticPrecessor {
    /// Precession from the mean ecliptic and equinox of `jde_from` to those of `jde_to`.
    pub fn new(jde_from: JDE, jde_to: JDE) -> Self {
        let big_t = julian_centuries(jde_from);
        let t = (jde_to - jde_from) / DAYS_PER_JULIAN_CENTURY;

        let eta = (((0.000060 * t) + (-0.03302 + 0.000598 * big_t)) * t
            + (47.0029 - 0.06603 * big_t + 0.000598 * big_t * big_t))
            * t
            * RADSEC;
        let pi = 174.876384 * RADEG
            + ((3289.4789 + 0.60622 * big_t) * big_t
                - (869.8089 + 0.50491 * big_t) * t
                + 0.03536 * t * t)
                * RADSEC;
        let p = (((-0.000006 * t) + (1.11113 - 0.000042 * big_t)) * t
            + (5029.0966 + 2.22226 * big_t - 0.000042 * big_t * big_t))
            * t
            * RADSEC;

        let (sin_eta, cos_eta) = eta.sin_cos();
        EclipticPrecessor {
            sin_eta,
            cos_eta,
            pi,
            p,
        }
    }

    /// Precession from J2000.0, the reference frame of the VSOP87B tables.
    pub fn from_j2000(jde_to: JDE) -> Self {
        EclipticPrecessor::new(J2000_JD, jde_to)
    }

    /// General precession in longitude accumulated between the two epochs.
    pub fn general_precession(&self) -> Radian {
        self.p
    }

    /// Reduce an ecliptic position.
    ///
    /// Arguments
    /// ---------
    /// * `lon`: ecliptic longitude at the starting epoch (radians)
    /// * `lat`: ecliptic latitude at the starting epoch (radians)
    ///
    /// Return
    /// ------
    /// * `(lon, lat)` at the final epoch, the longitude normalized to `[0, 2π)`.
    pub fn reduce(&self, lon: Radian, lat: Radian) -> (Radian, Radian) {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_node, cos_node) = (self.pi - lon).sin_cos();

        let a = self.cos_eta * cos_lat * sin_node - self.sin_eta * sin_lat;
        let b = cos_lat * cos_node;
        let c = self.cos_eta * sin_lat + self.sin_eta * cos_lat * sin_node;

        let new_lon = principal_angle(self.p + self.pi - a.atan2(b));
        // near the poles asin is ill-conditioned
        let new_lat = if c.abs() < COS_SMALL_ANGLE {
            c.asin()
        } else {
            a.hypot(b).acos().copysign(c)
        };

        (new_lon, new_lat)
    }
}

#[cfg(test)]
mod precession_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_abs_diff_eq;

    fn wrapped_diff(a: Radian, b: Radian) -> Radian {
        (a - b + std::f64::consts::PI).rem_euclid(DPI) - std::f64::consts::PI
    }

    #[test]
    fn test_same_epoch_is_identity() {
        let precessor = EclipticPrecessor::new(2448976.5, 2448976.5);
        assert_eq!(precessor.general_precession(), 0.0);

        let (lon, lat) = precessor.reduce(1.0, 0.3);
        assert_abs_diff_eq!(lon, 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(lat, 0.3, epsilon = 1e-14);
    }

    #[test]
    fn test_one_century_of_general_precession() {
        let precessor = EclipticPrecessor::from_j2000(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        assert_abs_diff_eq!(
            precessor.general_precession(),
            (5029.0966 + 1.11113 - 0.000006) * RADSEC,
            epsilon = 1e-15
        );

        let (lon, lat) = precessor.reduce(0.0, 0.0);
        assert_abs_diff_eq!(lon, 1.397279785038647 * RADEG, epsilon = 1e-10);
        assert!(lat.abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let positions = [(1.0, 0.3), (4.0, -0.05), (0.1, 1.2), (5.5, -1.4)];
        let dates = [2415020.0, 2448976.5, 2488070.0];

        for &jde in &dates {
            let forward = EclipticPrecessor::from_j2000(jde);
            let backward = EclipticPrecessor::new(jde, J2000_JD);

            for &(lon, lat) in &positions {
                let (lon_date, lat_date) = forward.reduce(lon, lat);
                let (lon_back, lat_back) = backward.reduce(lon_date, lat_date);

                assert_abs_diff_eq!(wrapped_diff(lon_back, lon), 0.0, epsilon = 1e-8);
                assert_abs_diff_eq!(lat_back, lat, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_longitude_normalized() {
        let precessor = EclipticPrecessor::from_j2000(2488070.0);
        for lon in [-7.0, -0.01, 0.0, 6.28, 13.0] {
            let (reduced, _) = precessor.reduce(lon, 0.1);
            assert!((0.0..DPI).contains(&reduced), "{reduced} out of range");
        }
    }
}
