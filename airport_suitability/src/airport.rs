use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub icao: String,
    pub name: String,
    pub elevation_ft: i32,
    pub runways: Vec<Runway>,
}

/// One landing direction of a runway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub id: String,
    /// Heading in degrees, 1 to 360.
    pub heading: u16,
    pub length_ft: u32,
    pub width_ft: u32,
    /// ASPH, CONC, TURF and so on.
    pub surface: String,
    #[serde(default)]
    pub closed: bool,
}

impl Airport {
    pub fn all_runways(&self) -> &[Runway] {
        &self.runways
    }

    #[allow(dead_code)] // used in tests
    pub fn runway(&self, id: &str) -> Option<&Runway> {
        self.runways.iter().find(|runway| runway.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn kennedy() -> Airport {
        let runway = |id: &str, heading, length_ft| Runway {
            id: id.to_string(),
            heading,
            length_ft,
            width_ft: 150,
            surface: "ASPH".to_string(),
            closed: false,
        };
        Airport {
            icao: "KJFK".to_string(),
            name: "John F Kennedy Intl".to_string(),
            elevation_ft: 13,
            runways: vec![
                runway("04L", 40, 8400),
                runway("22R", 220, 8400),
                runway("13L", 130, 10000),
            ],
        }
    }

    #[test]
    fn test_airport_basics() {
        let airport = kennedy();
        assert_eq!(airport.icao, "KJFK");
        assert_eq!(airport.name, "John F Kennedy Intl");
        assert_eq!(airport.elevation_ft, 13);
        assert_eq!(airport.all_runways().len(), 3);
    }

    #[test]
    fn test_runway_lookup() {
        let airport = kennedy();
        assert_eq!(airport.runway("22R").map(|r| r.heading), Some(220));
        assert!(airport.runway("31L").is_none());
    }

    #[test]
    fn test_closed_defaults_to_open() {
        let runway: Runway = serde_json::from_str(
            r#"{"id": "09", "heading": 90, "length_ft": 3000, "width_ft": 75, "surface": "TURF"}"#,
        )
        .unwrap();
        assert!(!runway.closed);
        assert_eq!(runway.surface, "TURF");
    }
}
