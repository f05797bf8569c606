//! Report command handlers
//!
//! Reports are Jupyter-notebook definitions filled in with run data; the
//! section mapping subcommands arrange sections into a report by name and
//! position.

use anyhow::Result;
use carrot_client::reports::{NewReport, ReportQuery, ReportSectionQuery, ReportUpdate};
use clap::Subcommand;

use crate::commands::{created_by_or_exit, print_outcome};
use crate::config::Config;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Retrieve a report by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The report's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve reports filtered to match the specified parameters
    Find {
        /// The report's ID, a version 4 UUID
        #[arg(long = "report_id", default_value = "")]
        report_id: String,
        /// The name of the report, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the report, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The metadata of the report
        #[arg(long, default_value = "")]
        metadata: String,
        /// Upper bound for report's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for report's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the report, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of report records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create report with the specified parameters
    Create {
        /// The name of the report
        #[arg(long, required = true)]
        name: String,
        /// The description of the report
        #[arg(long, default_value = "")]
        description: String,
        /// Email of the creator of the report.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update report with ID with the specified parameters
    Update {
        /// The report's ID, a version 4 UUID
        id: String,
        /// The name of the report
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the report
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a report by its ID
    Delete {
        /// The report's ID, a version 4 UUID
        id: String,
    },
    /// Map the section specified by SECTION_ID into the report specified by
    /// ID under NAME at POSITION
    #[command(name = "map_to_section")]
    MapToSection {
        /// The report's ID, a version 4 UUID
        id: String,
        /// The section's ID, a version 4 UUID
        section_id: String,
        /// The name the section appears under within the report
        name: String,
        /// The position of the section within the report
        position: i64,
        /// Email of the creator of the mapping.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Retrieve the mapping record for the report specified by ID, the
    /// section specified by SECTION_ID, and NAME
    #[command(name = "find_section_map_by_id")]
    FindSectionMapById {
        /// The report's ID, a version 4 UUID
        id: String,
        /// The section's ID, a version 4 UUID
        section_id: String,
        /// The name the section appears under within the report
        name: String,
    },
    /// Retrieve section mapping records for the report specified by ID,
    /// filtered to match the specified parameters
    #[command(name = "find_section_maps")]
    FindSectionMaps {
        /// The report's ID, a version 4 UUID
        id: String,
        /// The section's ID, a version 4 UUID
        #[arg(long = "section_id", default_value = "")]
        section_id: String,
        /// The name the section appears under within the report
        #[arg(long, default_value = "")]
        name: String,
        /// The position of the section within the report
        #[arg(long)]
        position: Option<i64>,
        /// Upper bound for the mapping's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for the mapping's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the mapping
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of mapping records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Delete the mapping record for the report specified by ID, the section
    /// specified by SECTION_ID, and NAME
    #[command(name = "delete_section_map_by_id")]
    DeleteSectionMapById {
        /// The report's ID, a version 4 UUID
        id: String,
        /// The section's ID, a version 4 UUID
        section_id: String,
        /// The name the section appears under within the report
        name: String,
    },
}

/// Handle report commands
pub async fn handle_report_command(command: ReportCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ReportCommands::FindById { id } => print_outcome(client.find_report_by_id(&id).await),
        ReportCommands::Find {
            report_id,
            name,
            description,
            metadata,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = ReportQuery {
                report_id,
                name,
                description,
                metadata,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_reports(query).await)
        }
        ReportCommands::Create {
            name,
            description,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let report = NewReport {
                name,
                description,
                created_by,
            };
            print_outcome(client.create_report(report).await)
        }
        ReportCommands::Update {
            id,
            name,
            description,
        } => {
            let update = ReportUpdate { name, description };
            print_outcome(client.update_report(&id, update).await)
        }
        ReportCommands::Delete { id } => print_outcome(client.delete_report(&id).await),
        ReportCommands::MapToSection {
            id,
            section_id,
            name,
            position,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            print_outcome(
                client
                    .map_report_to_section(&id, &section_id, &name, position, &created_by)
                    .await,
            )
        }
        ReportCommands::FindSectionMapById {
            id,
            section_id,
            name,
        } => print_outcome(client.find_report_section_map(&id, &section_id, &name).await),
        ReportCommands::FindSectionMaps {
            id,
            section_id,
            name,
            position,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = ReportSectionQuery {
                section_id,
                name,
                position,
                created_before,
                created_after,
                created_by,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_report_section_maps(&id, query).await)
        }
        ReportCommands::DeleteSectionMapById {
            id,
            section_id,
            name,
        } => print_outcome(
            client
                .delete_report_section_map(&id, &section_id, &name)
                .await,
        ),
    }
}
