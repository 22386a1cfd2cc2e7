use std::path::Path;

use tracing::debug;

use crate::cli::args::Cli;
use crate::compute::{list_platforms, OpenClEngine};
use crate::error::Result;
use crate::models::{Station, StationReport};
use crate::processors::StationAggregator;
use crate::readers::ObservationReader;
use crate::utils::constants::{INPUT_FILE, KERNELS_FILE};
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    if cli.list {
        println!("{}", list_platforms()?);
    }

    let engine = OpenClEngine::new(cli.platform, cli.device, Path::new(KERNELS_FILE))?;
    println!(
        "Running on {}, {}",
        engine.platform_name(),
        engine.device_name()
    );

    let progress = ProgressReporter::new_spinner("Loading observations...", false);
    let reader = ObservationReader::new();
    let records = reader.read_observations(Path::new(INPUT_FILE))?;
    let total: usize = records.values().map(Vec::len).sum();
    progress.finish_with_message(format!("Loaded {total} records").as_str());

    let aggregator = StationAggregator::new(&engine);

    // Stations are processed strictly sequentially, in the fixed station
    // order; a station with no records produces no section.
    for station in Station::ALL {
        let Some(observations) = records.get(&station) else {
            debug!(%station, "no records, skipping");
            continue;
        };
        if observations.is_empty() {
            continue;
        }

        let summaries = aggregator.summarize_station(observations)?;
        let report = StationReport::new(station, summaries);
        println!("{report}");
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Ignore a second init in test contexts.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
