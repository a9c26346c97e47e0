//! # vsop_ephem
//!
//! Heliocentric positions of the major planets from the VSOP87 planetary theory
//! (Bretagnon & Francou, 1988), version B: spherical coordinates referred to the
//! dynamical ecliptic and equinox J2000.0.
//!
//! ## Modules
//!
//! - [`series`] – coefficient tables and the periodic series evaluator
//! - [`vsop87_reader`] – parser of the IMCCE `VSOP87B.*` text files
//! - [`coefficient_source`] – where the tables come from (directory, memory, configuration)
//! - [`planet_position`] – the [`PlanetPosition`](planet_position::PlanetPosition) engine
//! - [`precession`] – ecliptic precession between two epochs
//! - [`fk5`] – dynamical frame → FK5 correction
//! - [`coordinates`] – position type, rectangular and equatorial conversions
//!
//! ## Quick start
//!
//! ```rust, no_run
//! use vsop_ephem::fk5::to_fk5;
//! use vsop_ephem::planet::Planet;
//! use vsop_ephem::planet_position::PlanetPosition;
//!
//! let venus = PlanetPosition::load(Planet::Venus).unwrap();
//! let jde = 2448976.5;
//! let pos = venus.position(jde);
//! let (lon_fk5, lat_fk5) = to_fk5(pos.lon, pos.lat, jde);
//! println!("{lon_fk5} {lat_fk5} {}", pos.range);
//! ```
//!
//! The coefficient files are not shipped with the crate. Point the `VSOP87` environment
//! variable at a directory holding them, pass a
//! [`DataSourceConfig`](coefficient_source::DataSourceConfig), or enable the
//! `vsop-download` feature to fetch them into the user cache directory.
pub mod coefficient_source;
pub mod constants;
pub mod coordinates;
pub mod download_vsop_file;
pub mod fk5;
pub mod planet;
pub mod planet_position;
pub mod precession;
pub mod series;
pub mod time;
pub mod vsop87_reader;
pub mod vsop_errors;
