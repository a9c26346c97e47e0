//! # Coefficient sources
//!
//! The position engine does not know where the coefficient tables come from; it asks a
//! [`CoefficientSource`] for the [`PlanetCoefficients`] of one [`Planet`].
//!
//! ## Provided sources
//!
//! - [`Vsop87Directory`] – a directory holding the IMCCE `VSOP87B.*` text files.
//! - [`InMemorySource`] – tables already in memory (embedded, deserialized with serde, or
//!   built by hand for tests).
//! - [`DataSourceConfig`] – a textual configuration resolved to one of the directories:
//!
//! | Descriptor    | Directory                                                  |
//! |---------------|------------------------------------------------------------|
//! | `"env"`       | value of the `VSOP87` environment variable                 |
//! | `"dir:<path>"`| `<path>`                                                   |
//! | `"cache"`     | `<user cache dir>/vsop_ephem/vsop87`, downloaded on demand |
//!
//! ```rust, no_run
//! use vsop_ephem::coefficient_source::{CoefficientSource, DataSourceConfig};
//! use vsop_ephem::planet::Planet;
//!
//! let config: DataSourceConfig = "dir:/data/vsop87".parse().unwrap();
//! let mars = config.load(Planet::Mars).unwrap();
//! println!("{} terms", mars.term_count());
//! ```
//!
//! Sources must be `Send + Sync`; loading is the only I/O of the crate and its failure
//! policy (retries, fallbacks) belongs to the caller.
use std::{collections::HashMap, fmt, fs, str::FromStr};

use camino::{Utf8Path, Utf8PathBuf};

use crate::{
    constants::VSOP87_ENV_VAR,
    download_vsop_file::{cache_directory, get_coefficient_file},
    planet::Planet,
    series::PlanetCoefficients,
    vsop87_reader::parse_vsop87,
    vsop_errors::VsopError,
};

/// Provider of planet coefficient tables.
pub trait CoefficientSource: Send + Sync {
    /// Load the complete coefficient set of `planet`.
    ///
    /// Return
    /// ------
    /// * The coefficient set, or a [`VsopError`] when the table is unavailable or invalid.
    fn load(&self, planet: Planet) -> Result<PlanetCoefficients, VsopError>;
}

/// Directory of VSOP87 version B files (`VSOP87B.mer` … `VSOP87B.nep`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vsop87Directory {
    root: Utf8PathBuf,
}

impl Vsop87Directory {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Vsop87Directory { root: root.into() }
    }

    /// Directory named by the `VSOP87` environment variable.
    pub fn from_env() -> Result<Self, VsopError> {
        let root = std::env::var(VSOP87_ENV_VAR)
            .map_err(|_| VsopError::MissingEnvironmentVariable(VSOP87_ENV_VAR.into()))?;
        Ok(Vsop87Directory::new(root))
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn file_path(&self, planet: Planet) -> Utf8PathBuf {
        self.root.join(planet.vsop87b_file_name())
    }

    fn read_file(planet: Planet, path: &Utf8Path) -> Result<PlanetCoefficients, VsopError> {
        if !path.exists() {
            return Err(VsopError::CoefficientFileNotFound(path.to_string()));
        }

        let text = fs::read_to_string(path)?;
        let coefficients = parse_vsop87(planet, &text)?;
        log::info!(
            "Loaded VSOP87B table of {planet} from {path} (L: {}, B: {}, R: {} terms)",
            coefficients.longitude().term_count(),
            coefficients.latitude().term_count(),
            coefficients.radius().term_count()
        );
        Ok(coefficients)
    }
}

impl CoefficientSource for Vsop87Directory {
    fn load(&self, planet: Planet) -> Result<PlanetCoefficients, VsopError> {
        Vsop87Directory::read_file(planet, &self.file_path(planet))
    }
}

/// Coefficient tables held in memory, keyed by planet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemorySource {
    tables: HashMap<Planet, PlanetCoefficients>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the table of `coefficients.planet()`.
    pub fn insert(&mut self, coefficients: PlanetCoefficients) -> Option<PlanetCoefficients> {
        self.tables.insert(coefficients.planet(), coefficients)
    }

    pub fn with(mut self, coefficients: PlanetCoefficients) -> Self {
        self.insert(coefficients);
        self
    }

    pub fn planets(&self) -> impl Iterator<Item = Planet> + '_ {
        self.tables.keys().copied()
    }
}

impl FromIterator<PlanetCoefficients> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = PlanetCoefficients>>(iter: I) -> Self {
        iter.into_iter().fold(InMemorySource::new(), InMemorySource::with)
    }
}

impl CoefficientSource for InMemorySource {
    fn load(&self, planet: Planet) -> Result<PlanetCoefficients, VsopError> {
        self.tables
            .get(&planet)
            .cloned()
            .ok_or(VsopError::PlanetNotAvailable(planet))
    }
}

/// Textual selection of the VSOP87 data directory.
///
/// Parsed from `"env"`, `"cache"` or `"dir:<path>"` (see the module documentation).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSourceConfig {
    #[default]
    Environment,
    Directory(Utf8PathBuf),
    Cache,
}

impl DataSourceConfig {
    /// Resolve the configuration to a concrete directory.
    pub fn directory(&self) -> Result<Vsop87Directory, VsopError> {
        match self {
            DataSourceConfig::Environment => Vsop87Directory::from_env(),
            DataSourceConfig::Directory(path) => Ok(Vsop87Directory::new(path.clone())),
            DataSourceConfig::Cache => Ok(Vsop87Directory::new(cache_directory()?)),
        }
    }
}

impl CoefficientSource for DataSourceConfig {
    fn load(&self, planet: Planet) -> Result<PlanetCoefficients, VsopError> {
        let directory = self.directory()?;
        match self {
            DataSourceConfig::Cache => {
                let path = get_coefficient_file(directory.root(), planet)?;
                Vsop87Directory::read_file(planet, &path)
            }
            _ => directory.load(planet),
        }
    }
}

impl FromStr for DataSourceConfig {
    type Err = VsopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "env" => Ok(DataSourceConfig::Environment),
            "cache" => Ok(DataSourceConfig::Cache),
            other => match other.split_once(':') {
                Some(("dir", path)) if !path.trim().is_empty() => {
                    Ok(DataSourceConfig::Directory(Utf8PathBuf::from(path.trim())))
                }
                _ => Err(VsopError::InvalidDataSource(format!(
                    "{other:?} (expected \"env\", \"cache\" or \"dir:<path>\")"
                ))),
            },
        }
    }
}

impl TryFrom<&str> for DataSourceConfig {
    type Error = VsopError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DataSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceConfig::Environment => f.write_str("env"),
            DataSourceConfig::Directory(path) => write!(f, "dir:{path}"),
            DataSourceConfig::Cache => f.write_str("cache"),
        }
    }
}
