use std::{
    fs::{self, File},
    io,
    path::Path,
};

use indexmap::IndexSet;
use metar_decoder::Weather;
use tracing::{info, warn};

fn get_already_partial_metars(path: &Path) -> IndexSet<String> {
    File::open(path)
        .ok()
        .and_then(|rdr| serde_json::from_reader(rdr).ok())
        .unwrap_or_default()
}

fn write_partial_metars(path: &Path, partial: &IndexSet<String>) -> io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, partial)?;
    Ok(())
}

/// Lines where the decoder missed the wind or the visibility group.
fn find_partial_metars(metars: &str, previous: IndexSet<String>) -> IndexSet<String> {
    let mut to_test = previous;
    to_test.extend(metars.lines().map(|line| line.trim().to_owned()));
    to_test
        .into_iter()
        .filter(|line| !line.is_empty())
        .filter(|line| !Weather::parse(line).recognized().is_complete())
        .collect()
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::env::args().nth(1).unwrap_or_else(|| "metars.txt".to_string());
    let metars =
        fs::read_to_string(&input).inspect_err(|e| warn!(%input, "Could not read: {e}"))?;

    let path = Path::new("partial_metars.json");
    let previous = get_already_partial_metars(path);
    let known = previous.len();
    let partial = find_partial_metars(&metars, previous);
    info!(
        %input,
        previously_partial = known,
        partial = partial.len(),
        "Checked METARs"
    );
    write_partial_metars(path, &partial)
}
