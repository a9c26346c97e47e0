use hifitime::Epoch;

use crate::constants::{
    JDE, DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, DAYS_PER_JULIAN_YEAR, J2000_JD,
};

/// Julian Ephemeris Day of an epoch, in the TT time scale.
///
/// Argument
/// --------
/// * `epoch`: any hifitime epoch, whatever its time scale
///
/// Return
/// ------
/// * the Julian Ephemeris Day (TT) of `epoch`
pub fn jde_from_epoch(epoch: &Epoch) -> JDE {
    epoch.to_jde_tt_days()
}

/// Time argument of the VSOP87 series: Julian millennia from J2000.0.
pub fn julian_millennia(jde: JDE) -> f64 {
    (jde - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Julian centuries from J2000.0, the time argument of the precession and FK5 formulas.
pub fn julian_centuries(jde: JDE) -> f64 {
    (jde - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian epoch (e.g. `2000.0`, `1992.97`) of a Julian Ephemeris Day.
pub fn julian_year(jde: JDE) -> f64 {
    2000.0 + (jde - J2000_JD) / DAYS_PER_JULIAN_YEAR
}
