use std::{
    convert::Infallible,
    io::{self, BufRead, BufReader, Read},
    str::FromStr,
};

use serde::Serialize;
use tracing::debug;

use crate::{
    ceiling::{Ceiling, scan_ceiling},
    visibility::{Visibility, scan_visibility},
    wind::{Wind, scan_wind},
};

/// Wind, visibility and ceiling read from one METAR line.
///
/// Parsing never fails: groups that cannot be found keep their default
/// values, so a partial or noisy report still yields a usable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "WeatherRecord")]
pub struct Weather {
    pub raw: String,
    pub wind: Wind,
    pub visibility: Visibility,
    pub ceiling: Ceiling,
}

/// Flat view of [`Weather`] as it is written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    #[serde(rename = "metar")]
    pub raw_text: String,
    #[serde(rename = "wind_direction")]
    pub wind_direction_deg: u32,
    pub wind_speed_kt: u32,
    #[serde(rename = "gust_kt")]
    pub gust_speed_kt: u32,
    pub visibility_sm: f64,
    pub ceiling_ft: u32,
    pub variable_wind: bool,
    pub calm_wind: bool,
}

/// Which groups [`Weather::parse`] actually found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedFields {
    pub wind: bool,
    pub visibility: bool,
    pub ceiling: bool,
}

impl RecognizedFields {
    /// Wind and visibility were both found. A missing ceiling is normal for
    /// clear skies, so it does not count.
    pub fn is_complete(&self) -> bool {
        self.wind && self.visibility
    }
}

impl Weather {
    pub fn parse(raw: &str) -> Self {
        let weather = Self {
            raw: raw.to_string(),
            wind: scan_wind(raw),
            visibility: scan_visibility(raw),
            ceiling: scan_ceiling(raw),
        };
        if !weather.recognized().is_complete() {
            debug!(raw, "METAR only partially recognized");
        }
        weather
    }

    /// The reporting station, when the report starts with a four letter ICAO
    /// identifier.
    pub fn station(&self) -> Option<&str> {
        self.raw
            .split_whitespace()
            .next()
            .filter(|icao| icao.len() == 4 && icao.chars().all(|c| c.is_ascii_alphanumeric()))
    }

    pub fn recognized(&self) -> RecognizedFields {
        RecognizedFields {
            wind: self.wind != Wind::NotReported,
            visibility: self.visibility != Visibility::NotReported,
            ceiling: self.ceiling != Ceiling::Unlimited,
        }
    }

    pub fn wind_direction_deg(&self) -> u32 {
        self.wind.direction_deg()
    }

    pub fn wind_speed_kt(&self) -> u32 {
        self.wind.speed_kt()
    }

    pub fn gust_speed_kt(&self) -> u32 {
        self.wind.gust_kt()
    }

    pub fn visibility_sm(&self) -> f64 {
        self.visibility.statute_miles()
    }

    pub fn ceiling_ft(&self) -> u32 {
        self.ceiling.feet()
    }

    pub fn is_variable_wind(&self) -> bool {
        self.wind.is_variable()
    }

    pub fn is_calm_wind(&self) -> bool {
        self.wind.is_calm()
    }
}

impl FromStr for Weather {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Weather> for WeatherRecord {
    fn from(weather: Weather) -> Self {
        Self {
            wind_direction_deg: weather.wind_direction_deg(),
            wind_speed_kt: weather.wind_speed_kt(),
            gust_speed_kt: weather.gust_speed_kt(),
            visibility_sm: weather.visibility_sm(),
            ceiling_ft: weather.ceiling_ft(),
            variable_wind: weather.is_variable_wind(),
            calm_wind: weather.is_calm_wind(),
            raw_text: weather.raw,
        }
    }
}

/// Parses every non-blank line of `input`.
pub fn parse_lines<R: Read>(input: R) -> io::Result<Vec<Weather>> {
    let reader = BufReader::new(input);
    let mut weathers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            weathers.push(Weather::parse(line));
        }
    }
    Ok(weathers)
}
