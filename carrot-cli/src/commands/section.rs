//! Section command handlers

use anyhow::Result;
use carrot_client::sections::{NewSection, SectionQuery, SectionUpdate};
use clap::Subcommand;

use crate::commands::{created_by_or_exit, print_outcome};
use crate::config::Config;

/// Section subcommands
#[derive(Subcommand)]
pub enum SectionCommands {
    /// Retrieve a section by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The section's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve sections filtered to match the specified parameters
    Find {
        /// The section's ID, a version 4 UUID
        #[arg(long = "section_id", default_value = "")]
        section_id: String,
        /// The name of the section, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the section, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The contents of the section
        #[arg(long, default_value = "")]
        contents: String,
        /// Upper bound for section's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for section's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the section, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of section records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create section with the specified parameters
    Create {
        /// The name of the section
        #[arg(long, required = true)]
        name: String,
        /// The description of the section
        #[arg(long, default_value = "")]
        description: String,
        /// The contents of the section
        #[arg(long, default_value = "")]
        contents: String,
        /// Email of the creator of the section.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update section with ID with the specified parameters
    Update {
        /// The section's ID, a version 4 UUID
        id: String,
        /// The name of the section
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the section
        #[arg(long, default_value = "")]
        description: String,
        /// The contents of the section
        #[arg(long, default_value = "")]
        contents: String,
    },
    /// Delete a section by its ID, if it is not mapped to any reports
    Delete {
        /// The section's ID, a version 4 UUID
        id: String,
    },
}

/// Handle section commands
pub async fn handle_section_command(command: SectionCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        SectionCommands::FindById { id } => print_outcome(client.find_section_by_id(&id).await),
        SectionCommands::Find {
            section_id,
            name,
            description,
            contents,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = SectionQuery {
                section_id,
                name,
                description,
                contents,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_sections(query).await)
        }
        SectionCommands::Create {
            name,
            description,
            contents,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let section = NewSection {
                name,
                description,
                contents,
                created_by,
            };
            print_outcome(client.create_section(section).await)
        }
        SectionCommands::Update {
            id,
            name,
            description,
            contents,
        } => {
            let update = SectionUpdate {
                name,
                description,
                contents,
            };
            print_outcome(client.update_section(&id, update).await)
        }
        SectionCommands::Delete { id } => print_outcome(client.delete_section(&id).await),
    }
}
