pub(crate) mod aircraft;
pub(crate) mod airport;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod report;
pub(crate) mod wind_components;

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use itertools::Itertools;
use metar_decoder::{Weather, parse_lines};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_unwrap::ResultExt;

use crate::{
    aircraft::WeightCategory,
    config::SuitabilityConfig,
    error::ApplicationResult,
    report::{AircraftLimits, AirportWindReport},
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(long, short)]
    /// Config file with airports and aircraft to use instead of the per user one
    config: Option<PathBuf>,
    #[clap(long)]
    /// Resets the per user config file to the bundled defaults
    clean_config: bool,
    #[clap(long, short)]
    /// METAR to report on, can be given several times
    metar: Vec<String>,
    #[clap(long, short)]
    /// File with one METAR per line, can be given several times
    file: Vec<PathBuf>,
    #[clap(long, short)]
    /// Aircraft type code whose wind limits are listed with each report
    aircraft: Option<String>,
    #[clap(long, short, value_enum, default_value_t)]
    /// Loading of the aircraft, picks the runway length it needs
    weight: WeightCategory,
    #[clap(long)]
    /// Print the reports as JSON
    json: bool,
}

/// METARs from the command line and files, or from stdin when neither is given.
fn read_weathers(cli: &Cli) -> ApplicationResult<Vec<Weather>> {
    let mut weathers = cli
        .metar
        .iter()
        .map(|metar| Weather::parse(metar))
        .collect_vec();
    weathers.extend(
        cli.file
            .iter()
            .map(|path| File::open(path).and_then(parse_lines))
            .filter_map(Result::ok_or_log)
            .flatten(),
    );
    if cli.metar.is_empty() && cli.file.is_empty() {
        weathers.extend(parse_lines(io::stdin().lock())?);
    }
    Ok(weathers)
}

fn run(cli: Cli) -> ApplicationResult<()> {
    let config = SuitabilityConfig::load(cli.config.as_deref(), cli.clean_config)?;
    let aircraft = cli
        .aircraft
        .as_deref()
        .map(|type_code| config.get_aircraft(type_code))
        .transpose()?;
    let weight = cli.weight;
    let weathers = read_weathers(&cli)?;

    let reports = weathers
        .iter()
        .filter_map(|weather| {
            let Some(icao) = weather.station() else {
                warn!(metar = %weather.raw, "No station identifier in METAR");
                return None;
            };
            let Some(airport) = config.get_airport(icao) else {
                warn!(icao, "Airport is not in the config");
                return None;
            };
            let limits = aircraft.map(|aircraft| AircraftLimits::new(aircraft, weight));
            Some(AirportWindReport::new(airport, weather, limits))
        })
        .collect_vec();

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &reports)?;
        writeln!(stdout)?;
    } else {
        for report in &reports {
            report.write_text(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() -> ApplicationResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run(Cli::parse())
}
