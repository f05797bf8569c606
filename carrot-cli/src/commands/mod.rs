//! Commands module
//!
//! Defines the subcommand groups and the shared helpers every group uses:
//! printing a client outcome, resolving the creator/subscriber email, and
//! reading JSON inputs from disk before any request is made.

mod config;
mod pipeline;
mod report;
mod result;
mod run;
mod section;
mod software;
mod subscription;
mod template;
mod test;

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;

use crate::config::{Config, EMAIL_VAR};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Commands for searching, creating, and updating pipelines
    Pipeline {
        #[command(subcommand)]
        command: pipeline::PipelineCommands,
    },
    /// Commands for searching, creating, and updating templates
    Template {
        #[command(subcommand)]
        command: template::TemplateCommands,
    },
    /// Commands for searching, creating, updating, and running tests
    Test {
        #[command(subcommand)]
        command: test::TestCommands,
    },
    /// Commands for searching and deleting runs
    Run {
        #[command(subcommand)]
        command: run::RunCommands,
    },
    /// Commands for searching, creating, and updating result definitions
    Result {
        #[command(subcommand)]
        command: result::ResultCommands,
    },
    /// Commands for searching, creating, and updating software records
    Software {
        #[command(subcommand)]
        command: software::SoftwareCommands,
    },
    /// Commands for searching, creating, and updating reports
    Report {
        #[command(subcommand)]
        command: report::ReportCommands,
    },
    /// Commands for searching, creating, and updating report sections
    Section {
        #[command(subcommand)]
        command: section::SectionCommands,
    },
    /// Commands for searching subscriptions
    Subscription {
        #[command(subcommand)]
        command: subscription::SubscriptionCommands,
    },
    /// Commands for getting and setting configuration variables
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// Print the version of carrot-cli
    Version,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Template { command } => template::handle_template_command(command, config).await,
        Commands::Test { command } => test::handle_test_command(command, config).await,
        Commands::Run { command } => run::handle_run_command(command, config).await,
        Commands::Result { command } => result::handle_result_command(command, config).await,
        Commands::Software { command } => software::handle_software_command(command, config).await,
        Commands::Report { command } => report::handle_report_command(command, config).await,
        Commands::Section { command } => section::handle_section_command(command, config).await,
        Commands::Subscription { command } => {
            subscription::handle_subscription_command(command, config).await
        }
        Commands::Config { command } => config::handle_config_command(command, config),
        Commands::Version => {
            println!("carrot-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Print a client outcome. Server responses and transport failures arrive as
/// formatted text and exit 0; only local failures (an unreadable upload)
/// reach the `Err` arm.
pub(crate) fn print_outcome(outcome: carrot_client::Result<String>) -> Result<()> {
    match outcome {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

/// Resolve the creator identity: the --created_by value when given, otherwise
/// the email config variable. Exits before any request when neither is set.
pub(crate) fn created_by_or_exit(created_by: String, config: &Config) -> String {
    if !created_by.is_empty() {
        return created_by;
    }
    match config.store.load_var_no_error(EMAIL_VAR) {
        Some(email) => email,
        None => {
            println!(
                "No email config variable set.  If a value is not specified for --created by, \
                 there must be a value set for email."
            );
            std::process::exit(1);
        }
    }
}

/// Resolve the subscriber email the same way; `action` names the operation in
/// the failure message ("Subscribing" or "Unsubscribing").
pub(crate) fn email_or_exit(email: String, config: &Config, action: &str) -> String {
    if !email.is_empty() {
        return email;
    }
    match config.store.load_var_no_error(EMAIL_VAR) {
        Some(email) => email,
        None => {
            println!(
                "{action} requires that an email address is supplied either via the --email \
                 flag or by setting the email config variable"
            );
            std::process::exit(1);
        }
    }
}

/// Read and parse a JSON input file named by a CLI flag. The empty string
/// means the flag was not supplied. Failures print a message naming the flag
/// and path and exit without touching the network.
pub(crate) fn read_json_input(path: &str, flag: &str) -> Option<Value> {
    if path.is_empty() {
        return None;
    }
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(flag, path, error = %err, "failed to read input file");
            println!("Unable to read the file supplied for {flag} at {path}");
            std::process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(flag, path, error = %err, "failed to parse input file");
            println!("The file supplied for {flag} at {path} is not valid JSON");
            std::process::exit(1);
        }
    }
}
