use anyhow::Context;
use clap::Parser;
use converter::cli::{wants_usage, TrackArgs, USAGE};
use converter::workflow::runner::TrackRunner;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    if wants_usage(std::env::args_os()) {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = TrackArgs::parse().into_config()?;
    info!(
        "converting {} series at scale 1:{}",
        config.inputs.len(),
        config.scale.scale_denominator()
    );
    let scale = config.scale;
    let result = TrackRunner::new(config).execute()?;

    let output = result
        .output
        .canonicalize()
        .with_context(|| format!("resolving {}", result.output.display()))?;
    println!(
        "KML written to: {} ({} series, {} points)",
        output.display(),
        result.metrics.emitted_series,
        result.metrics.emitted_points
    );
    println!(
        "Scale: 1:{}  |  {:.6} m per AU",
        scale.scale_denominator(),
        scale.meters_per_unit()
    );
    Ok(())
}
