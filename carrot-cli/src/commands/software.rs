//! Software command handlers
//!
//! Software records point CARROT at a git repository so it can build and run
//! specific commits; version records are created server-side and are
//! read-only here.

use anyhow::Result;
use carrot_client::software::{NewSoftware, SoftwareQuery, SoftwareUpdate};
use carrot_client::software_versions::SoftwareVersionQuery;
use clap::Subcommand;

use crate::commands::{created_by_or_exit, print_outcome};
use crate::config::Config;

/// Software subcommands
#[derive(Subcommand)]
pub enum SoftwareCommands {
    /// Retrieve a software record by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The software record's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve software records filtered to match the specified parameters
    Find {
        /// The software record's ID, a version 4 UUID
        #[arg(long = "software_id", default_value = "")]
        software_id: String,
        /// The name of the software, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the software, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The URL of the software's git repository
        #[arg(long = "repository_url", default_value = "")]
        repository_url: String,
        /// Upper bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the software record, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of software records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create software record with the specified parameters
    Create {
        /// The name of the software
        #[arg(long, required = true)]
        name: String,
        /// The description of the software
        #[arg(long, default_value = "")]
        description: String,
        /// The URL of the software's git repository
        #[arg(long = "repository_url", required = true)]
        repository_url: String,
        /// Email of the creator of the software record.  Defaults to email
        /// config variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update software record with ID with the specified parameters
    Update {
        /// The software record's ID, a version 4 UUID
        id: String,
        /// The name of the software
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the software
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Commands for querying software version records
    Version {
        #[command(subcommand)]
        command: SoftwareVersionCommands,
    },
}

/// Software version subcommands
#[derive(Subcommand)]
pub enum SoftwareVersionCommands {
    /// Retrieve a software version record by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The version record's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve software version records filtered to match the specified
    /// parameters
    Find {
        /// The version record's ID, a version 4 UUID
        #[arg(long = "software_version_id", default_value = "")]
        software_version_id: String,
        /// The ID of the software to find version records of, a version 4
        /// UUID
        #[arg(long = "software_id", default_value = "")]
        software_id: String,
        /// The commit hash for the version
        #[arg(long, default_value = "")]
        commit: String,
        /// The name of the software to find version records of,
        /// case-sensitive
        #[arg(long = "software_name", default_value = "")]
        software_name: String,
        /// Upper bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex.
        /// asc(software_name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of version records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
}

/// Handle software commands
pub async fn handle_software_command(command: SoftwareCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        SoftwareCommands::FindById { id } => print_outcome(client.find_software_by_id(&id).await),
        SoftwareCommands::Find {
            software_id,
            name,
            description,
            repository_url,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = SoftwareQuery {
                software_id,
                name,
                description,
                repository_url,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_software(query).await)
        }
        SoftwareCommands::Create {
            name,
            description,
            repository_url,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let software = NewSoftware {
                name,
                description,
                repository_url,
                created_by,
            };
            print_outcome(client.create_software(software).await)
        }
        SoftwareCommands::Update {
            id,
            name,
            description,
        } => {
            let update = SoftwareUpdate { name, description };
            print_outcome(client.update_software(&id, update).await)
        }
        SoftwareCommands::Version { command } => match command {
            SoftwareVersionCommands::FindById { id } => {
                print_outcome(client.find_software_version_by_id(&id).await)
            }
            SoftwareVersionCommands::Find {
                software_version_id,
                software_id,
                commit,
                software_name,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            } => {
                let query = SoftwareVersionQuery {
                    software_version_id,
                    software_id,
                    commit,
                    software_name,
                    created_before,
                    created_after,
                    sort,
                    limit,
                    offset,
                };
                print_outcome(client.find_software_versions(query).await)
            }
        },
    }
}
