use clap::Parser;
use converter::cli::TrailArgs;
use converter::workflow::runner::TrailRunner;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TrailArgs::parse().into_config()?;
    let result = TrailRunner::new(config).execute()?;

    println!(
        "KML generated: {} with {} points.",
        result.output.display(),
        result.metrics.emitted_points
    );
    Ok(())
}
