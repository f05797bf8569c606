//! Result command handlers

use anyhow::Result;
use carrot_client::results::{NewResult, ResultQuery, ResultUpdate};
use clap::Subcommand;

use crate::commands::{created_by_or_exit, print_outcome};
use crate::config::Config;

/// Result subcommands
#[derive(Subcommand)]
pub enum ResultCommands {
    /// Retrieve a result definition by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The result's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve results filtered to match the specified parameters
    Find {
        /// The result's ID, a version 4 UUID
        #[arg(long = "result_id", default_value = "")]
        result_id: String,
        /// The name of the result, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the result, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The type of the result: numeric, file, or text
        #[arg(long = "result_type", default_value = "")]
        result_type: String,
        /// Upper bound for result's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for result's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the result, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of result records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create result with the specified parameters
    Create {
        /// The name of the result
        #[arg(long, required = true)]
        name: String,
        /// The description of the result
        #[arg(long, default_value = "")]
        description: String,
        /// The type of the result: numeric, file, or text
        #[arg(long = "result_type", required = true)]
        result_type: String,
        /// Email of the creator of the result.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update result with ID with the specified parameters
    Update {
        /// The result's ID, a version 4 UUID
        id: String,
        /// The name of the result
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the result
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a result definition by its ID, if it is not mapped to any
    /// templates
    Delete {
        /// The result's ID, a version 4 UUID
        id: String,
    },
    /// Map the result specified by ID to the template specified by
    /// TEMPLATE_ID for RESULT_KEY in the output generated by that template
    #[command(name = "map_to_template")]
    MapToTemplate {
        /// The result's ID, a version 4 UUID
        id: String,
        /// The template's ID, a version 4 UUID
        template_id: String,
        /// The key the result's value is filed under in the template's output
        result_key: String,
        /// Email of the creator of the mapping.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
}

/// Handle result commands
pub async fn handle_result_command(command: ResultCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ResultCommands::FindById { id } => print_outcome(client.find_result_by_id(&id).await),
        ResultCommands::Find {
            result_id,
            name,
            description,
            result_type,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = ResultQuery {
                result_id,
                name,
                description,
                result_type,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_results(query).await)
        }
        ResultCommands::Create {
            name,
            description,
            result_type,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let result = NewResult {
                name,
                description,
                result_type,
                created_by,
            };
            print_outcome(client.create_result(result).await)
        }
        ResultCommands::Update {
            id,
            name,
            description,
        } => {
            let update = ResultUpdate { name, description };
            print_outcome(client.update_result(&id, update).await)
        }
        ResultCommands::Delete { id } => print_outcome(client.delete_result(&id).await),
        ResultCommands::MapToTemplate {
            id,
            template_id,
            result_key,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            // The mapping record is owned by the template side of the pair
            print_outcome(
                client
                    .map_template_to_result(&template_id, &id, &result_key, &created_by)
                    .await,
            )
        }
    }
}
