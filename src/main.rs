mod config;
mod report;

use crate::config::{AppConfig, OutputFormat, RosterSource, RunMode};
use crate::report::PlanReport;
use color_eyre::eyre::WrapErr;
use database::{RosterGenerator, RosterLoader, RosterResult};
use env_logger::Env;
use log::info;
use squad_core::utils::TimeEstimation;
use squad_core::{Individual, SquadPlanner};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().wrap_err("invalid configuration")?;

    let (roster, estimated) = TimeEstimation::estimate(|| load_roster(&config.roster));
    let roster = roster.wrap_err("failed to load roster")?;

    info!("roster loaded: {} individuals, {} ms", roster.len(), estimated);

    let (plans, estimated) = TimeEstimation::estimate(|| match config.mode {
        RunMode::Single => vec![SquadPlanner::plan(&roster, config.group_size)],
        RunMode::Overview => SquadPlanner::overview(&roster),
    });

    info!("planning finished: {} ms", estimated);

    match config.output {
        OutputFormat::Text => print!("{}", PlanReport::text(&plans)),
        OutputFormat::Json => println!(
            "{}",
            PlanReport::json(&plans).wrap_err("failed to serialize plan")?
        ),
    }

    Ok(())
}

fn load_roster(source: &RosterSource) -> RosterResult<Vec<Individual>> {
    match source {
        RosterSource::Bundled => RosterLoader::load(),
        RosterSource::File(path) => RosterLoader::load_from_path(path),
        RosterSource::Generated { seed, size } => RosterGenerator::with_seed(*seed).generate(*size),
    }
}
