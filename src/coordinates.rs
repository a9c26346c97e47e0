use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Radian, DPI, JDE, RADSEC},
    fk5::to_fk5,
};

/// Mean obliquity of the ecliptic at J2000.0 (IAU 1976), 23°26′21.448″.
pub const OBLIQUITY_J2000: Radian = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;

/// Reduce an angle to `[0, 2π)`.
///
/// `rem_euclid` rounds tiny negative angles up to `2π`; those are mapped to `0`.
pub fn principal_angle(a: Radian) -> Radian {
    let reduced = a.rem_euclid(DPI);
    if reduced == DPI {
        0.0
    } else {
        reduced
    }
}

/// Heliocentric ecliptic spherical position.
///
/// * `lon` – ecliptic longitude (radians)
/// * `lat` – ecliptic latitude (radians)
/// * `range` – radius vector (AU)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    pub lon: Radian,
    pub lat: Radian,
    pub range: AstronomicalUnit,
}

impl EclipticPosition {
    pub fn new(lon: Radian, lat: Radian, range: AstronomicalUnit) -> Self {
        EclipticPosition { lon, lat, range }
    }

    /// Rectangular coordinates in the same ecliptic frame (AU).
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        Vector3::new(
            self.range * cos_lat * cos_lon,
            self.range * cos_lat * sin_lon,
            self.range * sin_lat,
        )
    }

    /// Rectangular equatorial coordinates (AU) of a position referred to the ecliptic
    /// and equinox J2000.0, such as the ones returned by
    /// [`PlanetPosition::position2000`](crate::planet_position::PlanetPosition::position2000).
    ///
    /// The ecliptic vector is rotated about the X axis by the J2000 mean obliquity.
    pub fn to_equatorial_j2000(&self) -> Vector3<f64> {
        let ecl_to_equ = Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_J2000);
        ecl_to_equ * self.to_cartesian()
    }

    /// Same position with the FK5 correction applied to the angles.
    pub fn with_fk5(&self, jde: JDE) -> Self {
        let (lon, lat) = to_fk5(self.lon, self.lat, jde);
        EclipticPosition {
            lon,
            lat,
            range: self.range,
        }
    }
}

impl From<(Radian, Radian, AstronomicalUnit)> for EclipticPosition {
    fn from((lon, lat, range): (Radian, Radian, AstronomicalUnit)) -> Self {
        EclipticPosition { lon, lat, range }
    }
}

impl From<EclipticPosition> for (Radian, Radian, AstronomicalUnit) {
    fn from(position: EclipticPosition) -> Self {
        (position.lon, position.lat, position.range)
    }
}
