//! `mts` — run a timetable through the level-crossing scheduler.
//!
//! ```text
//! mts trains.txt
//! mts trains.txt --unit-ms 10 --threshold 4 --verbose
//! ```
//!
//! Reads the timetable, then spawns one loading worker per train and
//! arbitrates the single shared track until every train has crossed.  A
//! malformed or unreadable timetable is reported and exits non-zero before
//! any thread starts.

mod report;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn, LevelFilter};
use structopt::StructOpt;

use mts_core::SimConfig;
use mts_sim::Crossing;
use mts_timetable::load_timetable;

use report::ConsoleObserver;

#[derive(Debug, StructOpt)]
#[structopt(name = "mts", about = "Level-crossing train scheduler.")]
struct Opt {
    /// Timetable file: one `<direction> <loading> <crossing>` line per train.
    #[structopt(name = "FILE")]
    #[structopt(parse(from_os_str))]
    file: PathBuf,

    /// Wall-clock milliseconds per simulated time unit.
    #[structopt(long, default_value = "100")]
    unit_ms: u64,

    /// Consecutive crossings one direction may be granted while the other
    /// has a waiting train.
    #[structopt(long, default_value = "4")]
    threshold: u32,

    /// Activate debug logging.
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let trains = load_timetable(&opt.file)
        .with_context(|| format!("could not load timetable {:?}", opt.file))?;
    info!("loaded {} trains from {:?}", trains.len(), opt.file);

    let config = SimConfig {
        unit: Duration::from_millis(opt.unit_ms),
        starvation_threshold: opt.threshold,
    };

    let observer = ConsoleObserver::new();
    let summary = Crossing::new(trains, config).run(&observer)?;

    for id in &summary.skipped {
        warn!("train {id} was skipped: its worker could not be started");
    }
    info!("{} trains crossed", summary.dispatched.len());

    Ok(())
}
