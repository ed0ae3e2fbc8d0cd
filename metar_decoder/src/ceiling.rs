use nom::{IResult, Parser, branch::alt, bytes::complete::tag, sequence::preceded};
use tracing::trace;

use crate::scan::{digits, find_all};

/// Ceiling height reported in place of a measurement when no broken, overcast
/// or obscured layer exists.
pub const UNLIMITED_CEILING_FT: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ceiling {
    /// No qualifying cloud layer was reported.
    #[default]
    Unlimited,
    Feet(u32),
}

impl Ceiling {
    /// Height in feet, with [`UNLIMITED_CEILING_FT`] standing in for no ceiling.
    pub fn feet(&self) -> u32 {
        match self {
            Ceiling::Feet(feet) => *feet,
            Ceiling::Unlimited => UNLIMITED_CEILING_FT,
        }
    }

    /// Whether the ceiling is lower than `minimum_ft`. An unlimited ceiling is
    /// never below any minimum.
    pub fn is_below(&self, minimum_ft: u32) -> bool {
        match self {
            Ceiling::Feet(feet) => *feet < minimum_ft,
            Ceiling::Unlimited => false,
        }
    }
}

/// Lowest `BKN`, `OVC` or `VV` layer anywhere in `raw`.
pub(crate) fn scan_ceiling(raw: &str) -> Ceiling {
    match find_all(raw, nom_ceiling_layer).into_iter().min() {
        Some(feet) => Ceiling::Feet(feet),
        None => {
            trace!(raw, "No ceiling layer found");
            Ceiling::Unlimited
        }
    }
}

/// A ceiling layer with its height in hundreds of feet, returned in feet.
fn nom_ceiling_layer(input: &str) -> IResult<&str, u32> {
    preceded(alt((tag("BKN"), tag("OVC"), tag("VV"))), digits(3))
        .map(|hundreds| hundreds * 100)
        .parse(input)
}
