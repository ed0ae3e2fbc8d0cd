use metar_decoder::{Weather, wind::Wind};
use serde::Serialize;

/// Wind resolved along and across a runway.
///
/// A negative headwind is a tailwind. The crosswind is a magnitude only; the
/// side it blows from is not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindComponents {
    pub headwind_kt: i32,
    pub crosswind_kt: i32,
}

pub fn wind_components(weather: &Weather, runway_heading: u16) -> WindComponents {
    let speed = weather.wind.speed_kt();
    if weather.wind.is_calm() || speed == 0 {
        return WindComponents::default();
    }

    match weather.wind {
        // Unknown direction: assume all of it is crosswind.
        Wind::Variable { .. } => WindComponents {
            headwind_kt: 0,
            crosswind_kt: speed as i32,
        },
        Wind::Directional { direction_deg, .. } => {
            let angle = (f64::from(direction_deg) - f64::from(runway_heading)).to_radians();
            let speed = f64::from(speed);
            WindComponents {
                headwind_kt: (speed * angle.cos()).round() as i32,
                crosswind_kt: (speed * angle.sin()).abs().round() as i32,
            }
        }
        Wind::NotReported | Wind::Calm => WindComponents::default(),
    }
}

/// Wind speed to hold against aircraft limits; the gust when one is reported.
pub fn effective_wind_speed_kt(weather: &Weather) -> u32 {
    weather.wind.effective_speed_kt()
}
