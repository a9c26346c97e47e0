//! # Planet position engine
//!
//! [`PlanetPosition`] owns the VSOP87B coefficient set of one planet and evaluates its
//! heliocentric ecliptic coordinates at any Julian Ephemeris Day.
//!
//! ## Frames
//!
//! | Method                              | Frame of the result                                   |
//! |-------------------------------------|-------------------------------------------------------|
//! | [`PlanetPosition::position2000`]    | dynamical ecliptic and equinox J2000.0                |
//! | [`PlanetPosition::position`]        | mean dynamical ecliptic and equinox of the date       |
//!
//! Neither applies the FK5 correction; call [`to_fk5`](crate::fk5::to_fk5) (or
//! [`EclipticPosition::with_fk5`]) on the result when the FK5 frame is needed.
//!
//! ## Example
//!
//! ```rust, no_run
//! use vsop_ephem::planet::Planet;
//! use vsop_ephem::planet_position::PlanetPosition;
//!
//! // reads $VSOP87/VSOP87B.mar
//! let mars = PlanetPosition::load(Planet::Mars).unwrap();
//! let pos = mars.position2000(2415020.0);
//! println!("L = {} rad, B = {} rad, R = {} AU", pos.lon, pos.lat, pos.range);
//! ```
//!
//! Loading is the only fallible step. A loaded engine is immutable, evaluation never
//! fails, and the engine can be shared between threads (e.g. in an `Arc`) without locks.
use hifitime::Epoch;

use crate::{
    coefficient_source::{CoefficientSource, DataSourceConfig},
    constants::JDE,
    coordinates::{principal_angle, EclipticPosition},
    planet::Planet,
    precession::EclipticPrecessor,
    series::PlanetCoefficients,
    time::{jde_from_epoch, julian_millennia},
    vsop_errors::VsopError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPosition {
    coefficients: PlanetCoefficients,
}

impl PlanetPosition {
    /// Load a planet from the directory named by the `VSOP87` environment variable.
    pub fn load(planet: Planet) -> Result<Self, VsopError> {
        PlanetPosition::load_with_config(&DataSourceConfig::default(), planet)
    }

    /// Load a planet from the data source described by `config`.
    pub fn load_with_config(config: &DataSourceConfig, planet: Planet) -> Result<Self, VsopError> {
        PlanetPosition::load_from(config, planet)
    }

    /// Load a planet from any coefficient source.
    ///
    /// Arguments
    /// ---------
    /// * `source`: provider of the coefficient tables
    /// * `planet`: the requested planet
    ///
    /// Return
    /// ------
    /// * The engine, or a [`VsopError`] when the source cannot provide the table, provides
    ///   the table of another planet, or provides a table with an empty coordinate.
    pub fn load_from<S: CoefficientSource + ?Sized>(
        source: &S,
        planet: Planet,
    ) -> Result<Self, VsopError> {
        let coefficients = source.load(planet)?;
        if coefficients.planet() != planet {
            return Err(VsopError::PlanetMismatch {
                expected: planet,
                found: coefficients.planet(),
            });
        }
        PlanetPosition::from_coefficients(coefficients)
    }

    /// Build an engine around an already loaded coefficient set.
    pub fn from_coefficients(coefficients: PlanetCoefficients) -> Result<Self, VsopError> {
        coefficients.validate()?;
        Ok(PlanetPosition { coefficients })
    }

    pub fn planet(&self) -> Planet {
        self.coefficients.planet()
    }

    pub fn coefficients(&self) -> &PlanetCoefficients {
        &self.coefficients
    }

    /// Heliocentric position referred to the dynamical ecliptic and equinox J2000.0.
    ///
    /// Arguments
    /// ---------
    /// * `jde`: Julian Ephemeris Day (TT)
    ///
    /// Return
    /// ------
    /// * `lon` in `[0, 2π)`, `lat` and `range` as given by the series.
    pub fn position2000(&self, jde: JDE) -> EclipticPosition {
        let tau = julian_millennia(jde);
        let lon = self.coefficients.longitude().evaluate(tau);
        let lat = self.coefficients.latitude().evaluate(tau);
        let range = self.coefficients.radius().evaluate(tau);

        EclipticPosition::new(principal_angle(lon), lat, range)
    }

    /// Heliocentric position referred to the mean dynamical ecliptic and equinox of the date.
    ///
    /// The J2000 position of [`position2000`](Self::position2000) is precessed to `jde`;
    /// the radius vector is unchanged and `lon` lies in `[0, 2π)`.
    pub fn position(&self, jde: JDE) -> EclipticPosition {
        let j2000 = self.position2000(jde);
        let (lon, lat) = EclipticPrecessor::from_j2000(jde).reduce(j2000.lon, j2000.lat);
        EclipticPosition::new(lon, lat, j2000.range)
    }

    /// [`position`](Self::position) at a hifitime epoch.
    pub fn position_at(&self, epoch: &Epoch) -> EclipticPosition {
        self.position(jde_from_epoch(epoch))
    }

    /// [`position2000`](Self::position2000) at a hifitime epoch.
    pub fn position2000_at(&self, epoch: &Epoch) -> EclipticPosition {
        self.position2000(jde_from_epoch(epoch))
    }
}
