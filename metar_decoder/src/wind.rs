use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::opt,
    sequence::{preceded, terminated},
};
use tracing::trace;

use crate::scan::{digits, find_first};

/// Group reported when there is no wind at all.
pub const CALM_WIND_GROUP: &str = "00000KT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wind {
    /// No wind group could be found in the report.
    #[default]
    NotReported,
    Calm,
    Variable {
        speed_kt: u32,
    },
    Directional {
        direction_deg: u32,
        speed_kt: u32,
        gust_kt: Option<u32>,
    },
}

impl Wind {
    /// True heading the wind blows from, 0 unless the direction is reported.
    pub fn direction_deg(&self) -> u32 {
        match self {
            Wind::Directional { direction_deg, .. } => *direction_deg,
            Wind::NotReported | Wind::Calm | Wind::Variable { .. } => 0,
        }
    }

    pub fn speed_kt(&self) -> u32 {
        match self {
            Wind::Variable { speed_kt } | Wind::Directional { speed_kt, .. } => *speed_kt,
            Wind::NotReported | Wind::Calm => 0,
        }
    }

    /// Gust speed, 0 when no gust is reported.
    pub fn gust_kt(&self) -> u32 {
        match self {
            Wind::Directional {
                gust_kt: Some(gust),
                ..
            } => *gust,
            _ => 0,
        }
    }

    /// The peak wind to hold against aircraft limits: the gust if one is
    /// reported, otherwise the sustained speed.
    pub fn effective_speed_kt(&self) -> u32 {
        match self.gust_kt() {
            0 => self.speed_kt(),
            gust => gust,
        }
    }

    pub fn is_calm(&self) -> bool {
        matches!(self, Wind::Calm)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Wind::Variable { .. })
    }
}

/// Finds the wind group anywhere in `raw`.
///
/// Calm wins over variable, which wins over a directional group, regardless of
/// where in the report each one appears.
pub(crate) fn scan_wind(raw: &str) -> Wind {
    if raw.contains(CALM_WIND_GROUP) {
        return Wind::Calm;
    }
    if let Some(wind) = find_first(raw, nom_variable_wind) {
        return wind;
    }
    if let Some(wind) = find_first(raw, nom_directional_wind) {
        return wind;
    }
    trace!(raw, "No wind group found");
    Wind::NotReported
}

fn nom_speed(input: &str) -> IResult<&str, u32> {
    alt((digits(3), digits(2))).parse(input)
}

pub(crate) fn nom_variable_wind(input: &str) -> IResult<&str, Wind> {
    preceded(tag("VRB"), terminated(nom_speed, tag("KT")))
        .map(|speed_kt| Wind::Variable { speed_kt })
        .parse(input)
}

pub(crate) fn nom_directional_wind(input: &str) -> IResult<&str, Wind> {
    (
        digits(3),
        nom_speed,
        opt(preceded(char('G'), nom_speed)),
        tag("KT"),
    )
        .map(|(direction_deg, speed_kt, gust_kt, _)| Wind::Directional {
            direction_deg,
            speed_kt,
            gust_kt,
        })
        .parse(input)
}
