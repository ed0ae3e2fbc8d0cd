use std::io::{self, Write};

use itertools::Itertools;
use metar_decoder::{Weather, ceiling::Ceiling, visibility::Visibility};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    aircraft::{Aircraft, WeightCategory},
    airport::{Airport, Runway},
    wind_components::{WindComponents, effective_wind_speed_kt, wind_components},
};

/// Wind along and across every runway of an airport for one METAR.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct AirportWindReport<'a> {
    pub icao: &'a str,
    pub weather: &'a Weather,
    pub effective_wind_kt: u32,
    pub runways: Vec<RunwayWindReport<'a>>,
    pub aircraft: Option<AircraftLimits<'a>>,
}

/// The limits of the aircraft the report is read for.
#[derive(Debug, Serialize)]
pub(crate) struct AircraftLimits<'a> {
    #[serde(flatten)]
    pub aircraft: &'a Aircraft,
    pub weight: WeightCategory,
    pub required_runway_ft: u32,
}

impl<'a> AircraftLimits<'a> {
    pub fn new(aircraft: &'a Aircraft, weight: WeightCategory) -> Self {
        Self {
            aircraft,
            weight,
            required_runway_ft: aircraft.min_runway_ft_for(weight),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RunwayWindReport<'a> {
    pub id: &'a str,
    pub heading: u16,
    pub closed: bool,
    #[serde(flatten)]
    pub components: WindComponents,
}

impl<'a> RunwayWindReport<'a> {
    fn new(runway: &'a Runway, weather: &Weather) -> Self {
        Self {
            id: &runway.id,
            heading: runway.heading,
            closed: runway.closed,
            components: wind_components(weather, runway.heading),
        }
    }
}

impl<'a> AirportWindReport<'a> {
    pub fn new(
        airport: &'a Airport,
        weather: &'a Weather,
        aircraft: Option<AircraftLimits<'a>>,
    ) -> Self {
        Self {
            icao: &airport.icao,
            weather,
            effective_wind_kt: effective_wind_speed_kt(weather),
            runways: airport
                .all_runways()
                .iter()
                .map(|runway| RunwayWindReport::new(runway, weather))
                .collect(),
            aircraft,
        }
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.weather.raw)?;
        writeln!(
            writer,
            "  visibility {}, ceiling {}, effective wind {} kt",
            format_visibility(self.weather.visibility),
            format_ceiling(self.weather.ceiling),
            self.effective_wind_kt
        )?;
        let rows = self
            .runways
            .iter()
            .map(|runway| {
                let closed = if runway.closed { "  (closed)" } else { "" };
                format!(
                    "  {:<4}{:03}°  {}{closed}",
                    runway.id,
                    runway.heading,
                    format_wind_components(runway.components)
                )
            })
            .join("\n");
        writeln!(writer, "{rows}")?;
        if let Some(AircraftLimits {
            aircraft,
            required_runway_ft,
            ..
        }) = &self.aircraft
        {
            writeln!(
                writer,
                "  {} {}: max crosswind {} kt, max tailwind {} kt, runway {} ft",
                aircraft.type_code,
                aircraft.name,
                aircraft.max_crosswind_kt,
                aircraft.max_tailwind_kt,
                required_runway_ft
            )?;
        }
        Ok(())
    }
}

fn format_visibility(visibility: Visibility) -> String {
    match visibility {
        Visibility::StatuteMiles(miles) => format!("{miles} SM"),
        Visibility::NotReported => "not reported".to_string(),
    }
}

fn format_ceiling(ceiling: Ceiling) -> String {
    match ceiling {
        Ceiling::Feet(feet) => format!("{feet} ft"),
        Ceiling::Unlimited => "unlimited".to_string(),
    }
}

fn format_wind_components(components: WindComponents) -> String {
    const CALM: &str = "○";
    const HEADWIND: &str = "↑";
    const TAILWIND: &str = "↓";
    const CROSSWIND: &str = "↔";

    let longitudinal = if components.headwind_kt > 0 {
        format!("{HEADWIND}{:>2}", components.headwind_kt)
    } else if components.headwind_kt < 0 {
        format!("{TAILWIND}{:>2}", components.headwind_kt.abs())
    } else {
        format!("{CALM}  ")
    };

    let cross = if components.crosswind_kt > 0 {
        format!("{CROSSWIND}{:>2}", components.crosswind_kt)
    } else {
        format!("{CALM}  ")
    };

    format!("{longitudinal} {cross}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aircraft::tests::cessna_172, airport::tests::kennedy, config::SuitabilityConfig};

    fn render(report: &AirportWindReport) -> String {
        let mut buffer = Vec::new();
        report.write_text(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_wind_components() {
        let text = |headwind_kt, crosswind_kt| {
            format_wind_components(WindComponents {
                headwind_kt,
                crosswind_kt,
            })
        };
        assert_eq!(text(16, 19), "↑16 ↔19");
        assert_eq!(text(-5, 3), "↓ 5 ↔ 3");
        assert_eq!(text(0, 0), "○   ○  ");
        assert_eq!(text(0, 5).chars().count(), text(12, 12).chars().count());
    }

    #[test]
    fn test_report_for_every_runway() {
        let airport = kennedy();
        let weather = Weather::parse("KJFK 261456Z 09025G35KT 10SM FEW025 BKN050 12/05 A2992");
        let report = AirportWindReport::new(&airport, &weather, None);

        assert_eq!(report.icao, "KJFK");
        assert_eq!(report.effective_wind_kt, 35);
        assert_eq!(
            report.runways.iter().map(|runway| runway.id).collect_vec(),
            ["04L", "22R", "13L"]
        );
        assert_eq!(
            report.runways[2].components,
            WindComponents {
                headwind_kt: 19,
                crosswind_kt: 16
            }
        );

        let text = render(&report);
        assert!(text.starts_with("KJFK 261456Z"));
        assert!(text.contains("visibility 10 SM, ceiling 5000 ft, effective wind 35 kt"));
        assert!(text.contains("  13L 130°  ↑19 ↔16"));
        assert!(text.contains("  04L 040°  "));
        assert!(!text.contains("max crosswind"));
    }

    #[test]
    fn test_report_text_sentinels_and_closed_runways() {
        let config = SuitabilityConfig::new_for_test();
        let airport = config.get_airport("KBOS").unwrap();
        let weather = Weather::parse("KBOS 261456Z VRB05KT CLR 15/08 A3001");
        let aircraft = cessna_172();
        let limits = AircraftLimits::new(&aircraft, WeightCategory::Heavy);
        let report = AirportWindReport::new(airport, &weather, Some(limits));

        let text = render(&report);
        assert!(text.contains("visibility not reported, ceiling unlimited, effective wind 5 kt"));
        assert!(text.contains("15R 150°  ○   ↔ 5  (closed)"));
        assert!(text.contains(
            "C172 Cessna 172: max crosswind 15 kt, max tailwind 10 kt, runway 1500 ft"
        ));
    }

    #[test]
    fn test_report_json() {
        let airport = kennedy();
        let weather = Weather::parse("KJFK 261456Z 22010KT 1/2SM FG VV002 05/05 A3010");
        let report = AirportWindReport::new(&airport, &weather, None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["icao"], "KJFK");
        assert_eq!(json["weather"]["visibility_sm"], 0.5);
        assert_eq!(json["weather"]["ceiling_ft"], 200);
        assert_eq!(json["runways"][1]["id"], "22R");
        assert_eq!(json["runways"][1]["headwind_kt"], 10);
        assert_eq!(json["runways"][1]["crosswind_kt"], 0);
        assert_eq!(json["runways"][0]["headwind_kt"], -10);
        assert!(json.get("aircraft").is_none());
    }

    #[test]
    fn test_report_json_aircraft_limits() {
        let airport = kennedy();
        let weather = Weather::parse("KJFK 261456Z 22010KT 10SM");
        let config = SuitabilityConfig::new_for_test();
        let boeing = config.get_aircraft("B738").unwrap();
        let limits = AircraftLimits::new(boeing, WeightCategory::Light);
        let report = AirportWindReport::new(&airport, &weather, Some(limits));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["aircraft"]["type_code"], "B738");
        assert_eq!(json["aircraft"]["max_crosswind_kt"], 33);
        assert_eq!(json["aircraft"]["weight"], "light");
        assert_eq!(json["aircraft"]["required_runway_ft"], 5500);
    }
}
