//! # VSOP87 coefficient file reader
//!
//! Parser for the text tables distributed by the IMCCE (Bretagnon & Francou, 1988),
//! version **B**: heliocentric spherical coordinates referred to the dynamical
//! ecliptic and equinox J2000.0. One file holds one planet, e.g. `VSOP87B.mar`.
//!
//! ## File layout
//!
//! The file is a sequence of blocks, one per `(variable, power of time)`. Each block starts
//! with a header line followed by exactly the announced number of term lines:
//!
//! ```text
//!  VSOP87 VERSION B4    MARS      VARIABLE 1 (LBR)       *T**0   1409 TERMS    HIGH PRECISION
//!  2410    1  0  0  0  0  0  0  0  0  0  0  0  0  6.20347611291   0.00000000000   6.20347711581 0.00000000000        0.00000000000
//! ```
//!
//! A term line starts with a 4-digit code (version, body, variable, power) and ends with
//! the three numbers used by the theory: amplitude `A`, phase `B` and frequency `C`.
//! The fields in between (rank, argument multipliers, `S`, `K`) are ignored.
//!
//! ## Validation
//!
//! Any deviation from this layout is reported as a [`VsopError`], which the
//! engine surfaces as *data unavailable*:
//! - a line that should be a header and is not,
//! - a block announcing more terms than the file holds,
//! - a block for another body or another VSOP87 version,
//! - a variable outside `1..=3`, or the same block twice,
//! - an unreadable amplitude, phase or frequency,
//! - a coordinate without any term.
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    planet::Planet,
    series::{CoefficientSeries, Coordinate, CoordinateSeries, PlanetCoefficients, Term},
    vsop_errors::VsopError,
};

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"VSOP87\s+VERSION\s+([A-F])(\d)\s+(\w+)\s+VARIABLE\s+(\d)\s+\(\w+\)\s+\*T\*\*(\d+)\s+(\d+)\s+TERMS",
    )
    .unwrap()
});

/// Version letter of the heliocentric spherical J2000 tables.
const SUPPORTED_VERSION: &str = "B";

/// Highest power of time a term line can announce (single digit in the line code).
const MAX_POWER: usize = 9;

/// Decoded block header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockHeader {
    version: String,
    body_digit: u8,
    body_name: String,
    coordinate: Coordinate,
    power: usize,
    term_count: usize,
}

fn parse_header(line_no: usize, line: &str) -> Result<BlockHeader, VsopError> {
    let caps = HEADER_REGEX
        .captures(line)
        .ok_or_else(|| VsopError::malformed(line_no, "expected a VSOP87 block header"))?;

    let digit = |idx: usize| -> Result<u8, VsopError> {
        caps[idx]
            .parse()
            .map_err(|_| VsopError::malformed(line_no, format!("invalid digit {:?}", &caps[idx])))
    };

    let variable = digit(4)?;
    let coordinate = Coordinate::from_vsop_variable(variable).ok_or_else(|| {
        VsopError::malformed(line_no, format!("variable {variable} is not one of 1, 2, 3"))
    })?;

    let power: usize = caps[5]
        .parse()
        .map_err(|_| VsopError::malformed(line_no, format!("invalid power {:?}", &caps[5])))?;
    if power > MAX_POWER {
        return Err(VsopError::malformed(
            line_no,
            format!("power {power} is above the highest power {MAX_POWER}"),
        ));
    }
    let term_count = caps[6].parse().map_err(|_| {
        VsopError::malformed(line_no, format!("invalid term count {:?}", &caps[6]))
    })?;

    Ok(BlockHeader {
        version: caps[1].to_string(),
        body_digit: digit(2)?,
        body_name: caps[3].to_string(),
        coordinate,
        power,
        term_count,
    })
}

/// Read the amplitude, phase and frequency of a term line.
///
/// The line code (columns 2 to 5) must announce the version, body, variable and power
/// of the enclosing block.
fn parse_term(line_no: usize, line: &str, header: &BlockHeader) -> Result<Term, VsopError> {
    let code = line
        .get(1..5)
        .filter(|code| code.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| VsopError::malformed(line_no, "expected a coefficient line"))?
        .as_bytes();

    let version = code[0] - b'0';
    let body = code[1] - b'0';
    let header_version = header.version.as_bytes()[0] - b'A' + 1;
    if version != header_version || body != header.body_digit {
        return Err(VsopError::malformed(
            line_no,
            format!(
                "coefficient line of version {version} body {body} inside the block of version {header_version} body {}",
                header.body_digit
            ),
        ));
    }

    let variable = code[2] - b'0';
    let power = (code[3] - b'0') as usize;
    if variable != header.coordinate.vsop_variable() || power != header.power {
        return Err(VsopError::malformed(
            line_no,
            format!(
                "coefficient line for variable {variable} power {power} inside the block of variable {} power {}",
                header.coordinate.vsop_variable(),
                header.power
            ),
        ));
    }

    let mut fields = line.split_whitespace().rev();
    let mut next_field = |name: &str| -> Result<f64, VsopError> {
        let field = fields
            .next()
            .ok_or_else(|| VsopError::malformed(line_no, format!("missing {name} coefficient")))?;
        field.parse::<f64>().map_err(|err| {
            VsopError::malformed(line_no, format!("invalid {name} coefficient {field:?}: {err}"))
        })
    };

    let c = next_field("C")?;
    let b = next_field("B")?;
    let a = next_field("A")?;
    Ok(Term::new(a, b, c))
}

/// Parse the content of a `VSOP87B.*` file.
///
/// Arguments
/// ---------
/// * `planet`: the planet the table is expected to describe.
/// * `text`: full content of the coefficient file.
///
/// Return
/// ------
/// * The [`PlanetCoefficients`] of `planet`. Powers of time absent from the file are
///   represented by empty series, which contribute zero.
/// * A [`VsopError`] if the file is not a well-formed version B table of `planet`.
pub fn parse_vsop87(planet: Planet, text: &str) -> Result<PlanetCoefficients, VsopError> {
    let mut blocks: [Vec<Option<CoefficientSeries>>; 3] = Default::default();
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));
    let mut last_line = 0;

    while let Some((line_no, line)) = lines.next() {
        last_line = line_no;
        if line.trim().is_empty() {
            continue;
        }

        let header = parse_header(line_no, line)?;
        if header.version != SUPPORTED_VERSION {
            return Err(VsopError::malformed(
                line_no,
                format!(
                    "VSOP87 version {} is not supported (expected {SUPPORTED_VERSION})",
                    header.version
                ),
            ));
        }
        if header.body_digit != planet.vsop_body_digit()
            || !header.body_name.eq_ignore_ascii_case(planet.name())
        {
            return Err(VsopError::malformed(
                line_no,
                format!(
                    "block of body {} ({}) in the table of {planet}",
                    header.body_name, header.body_digit
                ),
            ));
        }

        // the announced count is untrusted until the lines are read
        let mut terms = Vec::new();
        for _ in 0..header.term_count {
            let (term_line_no, term_line) = lines.next().ok_or_else(|| {
                VsopError::malformed(
                    last_line + 1,
                    format!(
                        "unexpected end of file: block announces {} terms, found {}",
                        header.term_count,
                        terms.len()
                    ),
                )
            })?;
            last_line = term_line_no;
            terms.push(parse_term(term_line_no, term_line, &header)?);
        }

        let slots = &mut blocks[header.coordinate.vsop_variable() as usize - 1];
        if slots.len() <= header.power {
            slots.resize(header.power + 1, None);
        }
        if slots[header.power].is_some() {
            return Err(VsopError::malformed(
                line_no,
                format!(
                    "duplicate block for {} power {}",
                    header.coordinate, header.power
                ),
            ));
        }
        log::debug!(
            "{planet}: {} T^{} block with {} terms",
            header.coordinate,
            header.power,
            terms.len()
        );
        slots[header.power] = Some(CoefficientSeries::new(terms));
    }

    let [longitude, latitude, radius] = blocks.map(|slots| {
        CoordinateSeries::new(slots.into_iter().map(Option::unwrap_or_default).collect())
    });

    let coefficients = PlanetCoefficients::new(planet, longitude, latitude, radius);
    coefficients.validate()?;
    Ok(coefficients)
}
