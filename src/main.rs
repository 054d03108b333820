use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recordkeep::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("recordkeep=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run(Cli::parse())
}
