//! CARROT CLI
//!
//! Command-line interface for the CARROT test-orchestration service. Every
//! subcommand maps onto one REST call; the formatted response is printed to
//! stdout, and logging goes to stderr so the two never interleave.

mod commands;
mod config;

use anyhow::Result;
use carrot_client::Verbosity;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, ConfigStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "carrot")]
#[command(version, about = "CLI for the CARROT test orchestration service", long_about = None)]
struct Cli {
    /// Suppress all logging
    #[arg(
        short = 'q',
        long,
        global = true,
        overrides_with_all = ["quiet", "verbose", "trace"]
    )]
    quiet: bool,

    /// More verbose logging
    #[arg(
        short = 'v',
        long,
        global = true,
        overrides_with_all = ["quiet", "verbose", "trace"]
    )]
    verbose: bool,

    /// Highest level logging for debugging
    #[arg(
        long,
        global = true,
        overrides_with_all = ["quiet", "verbose", "trace"]
    )]
    trace: bool,

    /// CARROT server address (host:port), overriding the
    /// carrot_server_address config variable
    #[arg(long = "server_address", global = true, env = "CARROT_SERVER_ADDRESS")]
    server_address: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// The three flags are last-wins on the command line; clap resets the
    /// overridden ones, so at most one is set here.
    fn verbosity(&self) -> Verbosity {
        if self.trace {
            Verbosity::Trace
        } else if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let directives = match verbosity {
        Verbosity::Quiet => "off",
        Verbosity::Normal => "carrot_cli=info,carrot_client=info",
        Verbosity::Verbose => "carrot_cli=debug,carrot_client=debug",
        Verbosity::Trace => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directives.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors exit 1; help and version displays exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let verbosity = cli.verbosity();
    init_logging(verbosity);
    tracing::info!(
        "Invoked by: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );

    let store = ConfigStore::load()?;
    let server_address = cli
        .server_address
        .clone()
        .or_else(|| store.load_var_no_error(config::SERVER_ADDRESS_VAR));

    let config = Config {
        server_address,
        verbosity,
        store,
    };

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::parse_from(["carrot", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Normal);

        let cli = Cli::parse_from(["carrot", "-q", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);

        let cli = Cli::parse_from(["carrot", "-v", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Verbose);

        let cli = Cli::parse_from(["carrot", "--trace", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_verbosity_last_flag_wins() {
        let cli = Cli::parse_from(["carrot", "-q", "--trace", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        let cli = Cli::parse_from(["carrot", "--trace", "-q", "version"]);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}
