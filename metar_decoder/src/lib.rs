//! Lenient METAR decoding for runway suitability checks.
//!
//! Only the wind, statute miles visibility and ceiling groups are read. Each
//! one is searched for independently across the whole report, and any group
//! that cannot be found falls back to a default instead of failing the parse.

pub mod ceiling;
pub mod metar;
mod scan;
pub mod visibility;
pub mod wind;

pub use metar::{RecognizedFields, Weather, WeatherRecord, parse_lines};
