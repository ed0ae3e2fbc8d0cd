use nom::{
    IResult, Parser,
    character::complete::char,
    combinator::all_consuming,
    number::complete::double,
    sequence::separated_pair,
};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Visibility {
    #[default]
    NotReported,
    StatuteMiles(f64),
}

impl Visibility {
    /// Visibility in statute miles, 0 when none was reported.
    pub fn statute_miles(&self) -> f64 {
        match self {
            Visibility::StatuteMiles(miles) => *miles,
            Visibility::NotReported => 0.0,
        }
    }
}

/// Reads the visibility from the first whitespace separated token ending in
/// `SM`.
///
/// Only that single token is used, so a group split over two tokens such as
/// `1 1/2SM` reads as `1/2SM`.
pub(crate) fn scan_visibility(raw: &str) -> Visibility {
    let Some(value) = raw
        .split_whitespace()
        .find_map(|token| token.strip_suffix("SM"))
    else {
        trace!(raw, "No statute miles visibility group found");
        return Visibility::NotReported;
    };

    let miles = if value.contains('/') {
        all_consuming(nom_fraction)
            .parse(value)
            .ok()
            .and_then(|(_, (numerator, denominator))| {
                (denominator != 0.0).then(|| numerator / denominator)
            })
    } else {
        all_consuming(double::<&str, nom::error::Error<&str>>)
            .parse(value)
            .ok()
            .map(|(_, miles)| miles)
    };

    match miles {
        Some(miles) if miles.is_finite() && miles >= 0.0 => Visibility::StatuteMiles(miles),
        _ => {
            trace!(raw, value, "Unreadable statute miles visibility");
            Visibility::NotReported
        }
    }
}

fn nom_fraction(input: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(double, char('/'), double).parse(input)
}
