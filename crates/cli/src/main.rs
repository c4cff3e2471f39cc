//! Herald CLI
//!
//! Invoked by the CI runner at the end of a pipeline: looks up the
//! contributor's Slack ID, then sends them a direct message describing the
//! build outcome. The outcome is reported with runner workflow commands and
//! the process exits 0 either way.

mod actions;
mod config;
mod inputs;

use clap::Parser;
use herald_core::Invocation;
use herald_identity::HttpIdentityResolver;
use herald_relay::{Relay, Reporter, report};
use herald_slack::SlackSender;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

use crate::actions::ActionsReporter;
use crate::config::{ConfigArgs, ConfigError, RelayConfig};
use crate::inputs::{InputArgs, MissingInput};

/// Herald: notify a contributor on Slack about their CI run.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(flatten)]
    config: ConfigArgs,
}

/// The run could not start.
#[derive(Debug, Error)]
enum SetupError {
    #[error(transparent)]
    Input(#[from] MissingInput),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn prepare(cli: Cli) -> Result<(Invocation, RelayConfig), SetupError> {
    let invocation = cli.inputs.into_invocation()?;
    let config = RelayConfig::from_args(cli.config)?;
    Ok((invocation, config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut reporter = ActionsReporter::from_env();

    let (invocation, config) = match prepare(cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            reporter.set_failed(&e.to_string())?;
            return Ok(());
        }
    };

    let relay = Relay::new(
        HttpIdentityResolver::new(config.identity),
        SlackSender::new(config.slack),
    );

    let result = relay.run(&invocation).await;
    report(&result, &mut reporter)?;

    Ok(())
}
