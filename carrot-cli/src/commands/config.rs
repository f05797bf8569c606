//! Config command handlers
//!
//! Gets and sets the variables in the local config file. These commands never
//! touch the network.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::config::Config;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the config variable KEY to VALUE
    Set {
        /// The variable to set: carrot_server_address or email
        key: String,
        /// The value to store
        value: String,
    },
    /// Print the value of the config variable KEY
    Get {
        /// The variable to read: carrot_server_address or email
        key: String,
    },
}

/// Handle config commands
pub fn handle_config_command(command: ConfigCommands, config: &Config) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            let mut store = config.store.clone();
            store.set_var(&key, &value)?;
            println!(
                "{}",
                format!("✓ Set {} in {}", key, store.path().display()).green()
            );
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let value = config.store.load_var(&key)?;
            println!("{value}");
            Ok(())
        }
    }
}
