//! Pipeline command handlers

use anyhow::Result;
use carrot_client::pipelines::{NewPipeline, PipelineQuery, PipelineUpdate};
use clap::Subcommand;

use crate::commands::run::RunFilterArgs;
use crate::commands::{created_by_or_exit, email_or_exit, print_outcome};
use crate::config::Config;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Retrieve a pipeline by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The pipeline's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve pipelines filtered to match the specified parameters
    Find {
        /// The pipeline's ID, a version 4 UUID
        #[arg(long = "pipeline_id", default_value = "")]
        pipeline_id: String,
        /// The name of the pipeline, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the pipeline, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// Upper bound for pipeline's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for pipeline's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the pipeline, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of pipeline records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create pipeline with the specified parameters
    Create {
        /// The name of the pipeline
        #[arg(long, required = true)]
        name: String,
        /// The description of the pipeline
        #[arg(long, default_value = "")]
        description: String,
        /// Email of the creator of the pipeline.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update pipeline with ID with the specified parameters
    Update {
        /// The pipeline's ID, a version 4 UUID
        id: String,
        /// The name of the pipeline
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the pipeline
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a pipeline by its ID, if it has no templates associated with it
    Delete {
        /// The pipeline's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve runs of the pipeline specified by ID, filtered to match the
    /// specified parameters
    #[command(name = "find_runs")]
    FindRuns {
        /// The pipeline's ID, a version 4 UUID
        id: String,
        #[command(flatten)]
        filters: RunFilterArgs,
    },
    /// Subscribe to receive notifications about the pipeline specified by ID
    Subscribe {
        /// The pipeline's ID, a version 4 UUID
        id: String,
        /// The email address to receive notifications. If set, takes priority
        /// over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete subscription to the pipeline with the specified ID and email
    Unsubscribe {
        /// The pipeline's ID, a version 4 UUID
        id: String,
        /// The email address to stop receiving notifications. If set, takes
        /// priority over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
}

/// Handle pipeline commands
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        PipelineCommands::FindById { id } => print_outcome(client.find_pipeline_by_id(&id).await),
        PipelineCommands::Find {
            pipeline_id,
            name,
            description,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = PipelineQuery {
                pipeline_id,
                name,
                description,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_pipelines(query).await)
        }
        PipelineCommands::Create {
            name,
            description,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let pipeline = NewPipeline {
                name,
                description,
                created_by,
            };
            print_outcome(client.create_pipeline(pipeline).await)
        }
        PipelineCommands::Update {
            id,
            name,
            description,
        } => {
            let update = PipelineUpdate { name, description };
            print_outcome(client.update_pipeline(&id, update).await)
        }
        PipelineCommands::Delete { id } => print_outcome(client.delete_pipeline(&id).await),
        PipelineCommands::FindRuns { id, filters } => {
            print_outcome(client.find_pipeline_runs(&id, filters.into()).await)
        }
        PipelineCommands::Subscribe { id, email } => {
            let email = email_or_exit(email, config, "Subscribing");
            print_outcome(client.subscribe_to_pipeline(&id, &email).await)
        }
        PipelineCommands::Unsubscribe { id, email } => {
            let email = email_or_exit(email, config, "Unsubscribing");
            print_outcome(client.unsubscribe_from_pipeline(&id, &email).await)
        }
    }
}
