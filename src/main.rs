use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod example;
mod list_presets;
mod rebalance;
mod sample;
mod schema;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::Presets => list_presets::run(),
        cli::Command::Validate { file } => range_curve::validate::run(&file),
        cli::Command::Sample {
            file,
            order,
            side,
            zoom,
            steps,
            json,
        } => sample::run(&sample::SampleConfig {
            book_path: file,
            order,
            side: side.into(),
            zoom,
            steps,
            json,
        }),
        cli::Command::Rebalance {
            file,
            entry,
            percent,
            deposit,
            withdraw,
        } => rebalance::run(&rebalance::RebalanceConfig {
            book_path: file,
            entry,
            percent,
            deposit,
            withdraw,
        }),
    }
}
