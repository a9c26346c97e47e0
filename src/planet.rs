use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{constants::VSOP87B_FILE_PREFIX, vsop_errors::VsopError};

/// Identifier of a planet addressable by the VSOP87 theory.
///
/// The discriminants follow the body order of the VSOP87 distribution
/// (the body digit of every coefficient line is `discriminant + 1`).
/// Earth is addressable: its table yields the heliocentric position of the Earth,
/// from which Sun-referenced quantities are derived.
///
/// Conversions
/// -----------
/// * Use [`TryFrom<u8>`] to convert from a raw index (`0..=7`) to a `Planet`.
///   Invalid values return [`VsopError::InvalidPlanet`].
/// * Use [`From<Planet>`] to recover the index (`u8`).
/// * Use [`str::parse`] with an English name, case-insensitive (`"mars"`, `"Mars"`, `"MARS"`).
///
/// Examples
/// --------
/// ```rust
/// use vsop_ephem::planet::Planet;
///
/// let mars: Planet = "mars".parse().unwrap();
/// assert_eq!(mars, Planet::Mars);
/// assert_eq!(mars.vsop87b_file_name(), "VSOP87B.mar");
/// assert_eq!(u8::from(mars), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mercury = 0,
    Venus = 1,
    Earth = 2,
    Mars = 3,
    Jupiter = 4,
    Saturn = 5,
    Uranus = 6,
    Neptune = 7,
}

impl Planet {
    /// All planets, in VSOP87 body order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Extension of the planet's file in the VSOP87 distribution.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Planet::Mercury => "mer",
            Planet::Venus => "ven",
            Planet::Earth => "ear",
            Planet::Mars => "mar",
            Planet::Jupiter => "jup",
            Planet::Saturn => "sat",
            Planet::Uranus => "ura",
            Planet::Neptune => "nep",
        }
    }

    /// File name of the heliocentric spherical J2000 table, e.g. `VSOP87B.ven`.
    pub fn vsop87b_file_name(&self) -> String {
        format!("{VSOP87B_FILE_PREFIX}.{}", self.file_extension())
    }

    /// Body digit used in the VSOP87 coefficient lines (`1` for Mercury … `8` for Neptune).
    pub(crate) fn vsop_body_digit(&self) -> u8 {
        *self as u8 + 1
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Planet {
    type Error = VsopError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Planet::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| VsopError::InvalidPlanet(format!("index {value} (must be 0..=7)")))
    }
}

impl From<Planet> for u8 {
    fn from(planet: Planet) -> Self {
        planet as u8
    }
}

impl FromStr for Planet {
    type Err = VsopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Planet::ALL
            .into_iter()
            .find(|planet| planet.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                VsopError::InvalidPlanet(format!(
                    "{name:?} (expected one of {})",
                    Planet::ALL.iter().join(", ")
                ))
            })
    }
}

impl TryFrom<&str> for Planet {
    type Error = VsopError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod planet_test {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for planet in Planet::ALL {
            let raw: u8 = planet.into();
            assert_eq!(Planet::try_from(raw).unwrap(), planet);
        }
        assert_eq!(
            Planet::try_from(8u8),
            Err(VsopError::InvalidPlanet("index 8 (must be 0..=7)".into()))
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Venus".parse::<Planet>().unwrap(), Planet::Venus);
        assert_eq!(" NEPTUNE ".parse::<Planet>().unwrap(), Planet::Neptune);
        assert_eq!(Planet::try_from("jupiter").unwrap(), Planet::Jupiter);

        let err = "Pluto".parse::<Planet>().unwrap_err();
        assert_eq!(
            err,
            VsopError::InvalidPlanet(
                "\"Pluto\" (expected one of Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune)"
                    .into()
            )
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Planet::Mercury.vsop87b_file_name(), "VSOP87B.mer");
        assert_eq!(Planet::Earth.vsop87b_file_name(), "VSOP87B.ear");
        assert_eq!(Planet::Neptune.vsop87b_file_name(), "VSOP87B.nep");
        assert_eq!(Planet::Mercury.vsop_body_digit(), 1);
        assert_eq!(Planet::Neptune.vsop_body_digit(), 8);
    }
}
