use std::{
    fs,
    path::{Path, PathBuf},
};

use config::Config;
use directories::ProjectDirs;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::{
    aircraft::Aircraft,
    airport::Airport,
    error::{ApplicationError, ApplicationResult},
};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

fn airport_suitability_project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("", "meltinglava", "airport_suitability")
}

#[derive(Debug)]
pub(crate) struct SuitabilityConfig {
    #[allow(dead_code)] // used in tests
    config_file_path: PathBuf,
    airports: IndexMap<String, Airport>,
    aircraft: IndexMap<String, Aircraft>,
}

#[derive(Debug, Deserialize)]
struct Configurable {
    #[serde(default)]
    airports: Vec<Airport>,
    #[serde(default)]
    aircraft: Vec<Aircraft>,
}

impl SuitabilityConfig {
    /// Loads `path`, or the per user config file when no path is given.
    ///
    /// The per user file is created from the bundled defaults if it does not
    /// exist, and overwritten with them when `clean_config` is set.
    pub fn load(path: Option<&Path>, clean_config: bool) -> ApplicationResult<Self> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => setup_configuration(clean_config)?,
        };
        Self::from_file(config_file_path)
    }

    pub fn from_file(config_file_path: PathBuf) -> ApplicationResult<Self> {
        let configurable = Config::builder()
            .add_source(config::File::from(config_file_path.clone()).required(true))
            .build()?
            .try_deserialize::<Configurable>()?;

        let airports = configurable
            .airports
            .into_iter()
            .map(|airport| (airport.icao.clone(), airport))
            .collect::<IndexMap<_, _>>();
        let aircraft = configurable
            .aircraft
            .into_iter()
            .map(|aircraft| (aircraft.type_code.clone(), aircraft))
            .collect::<IndexMap<_, _>>();
        debug!(
            ?config_file_path,
            airports = airports.len(),
            aircraft = aircraft.len(),
            "Loaded config"
        );

        Ok(Self {
            config_file_path,
            airports,
            aircraft,
        })
    }

    pub fn get_airport(&self, icao: &str) -> Option<&Airport> {
        self.airports.get(icao)
    }

    pub fn get_aircraft(&self, type_code: &str) -> ApplicationResult<&Aircraft> {
        self.aircraft
            .get(type_code)
            .ok_or_else(|| ApplicationError::UnknownAircraft(type_code.to_string()))
    }
}

fn setup_configuration(clean_config: bool) -> ApplicationResult<PathBuf> {
    let project_dir =
        airport_suitability_project_dir().ok_or(ApplicationError::MissingProjectDirectory)?;
    let config_dir = project_dir.config_dir();
    let config_file = config_dir.join("config.toml");
    if clean_config || !config_file.exists() {
        fs::create_dir_all(config_dir)?;
        fs::write(&config_file, DEFAULT_CONFIG)?;
        debug!(?config_file, "Wrote default config");
    }
    Ok(config_file)
}
