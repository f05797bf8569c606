//! Template command handlers
//!
//! Template creation and update accept WDL locations as either remote URIs
//! or local paths; local files are uploaded by the client. The mapping
//! subcommands manage the template's associations with result definitions
//! and reports.

use anyhow::Result;
use carrot_client::templates::{
    NewTemplate, TemplateQuery, TemplateReportQuery, TemplateResultQuery, TemplateUpdate,
};
use clap::Subcommand;

use crate::commands::run::RunFilterArgs;
use crate::commands::{created_by_or_exit, email_or_exit, print_outcome};
use crate::config::Config;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Retrieve a template by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The template's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve templates filtered to match the specified parameters
    Find {
        /// The template's ID, a version 4 UUID
        #[arg(long = "template_id", default_value = "")]
        template_id: String,
        /// The ID of the pipeline that is the template's parent, a version 4
        /// UUID
        #[arg(long = "pipeline_id", default_value = "")]
        pipeline_id: String,
        /// The name of the template, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The name of the pipeline that is the template's parent,
        /// case-sensitive
        #[arg(long = "pipeline_name", default_value = "")]
        pipeline_name: String,
        /// The description of the template, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The location where the test WDL for the template is hosted
        #[arg(long = "test_wdl", default_value = "")]
        test_wdl: String,
        /// The location where the eval WDL for the template is hosted
        #[arg(long = "eval_wdl", default_value = "")]
        eval_wdl: String,
        /// Upper bound for template's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for template's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the template, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of template records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create template with the specified parameters
    Create {
        /// The name of the template
        #[arg(long, required = true)]
        name: String,
        /// The ID of the pipeline that will be this template's parent
        #[arg(long = "pipeline_id", required = true)]
        pipeline_id: String,
        /// The description of the template
        #[arg(long, default_value = "")]
        description: String,
        /// The location of the test WDL that defines the thing to be tested:
        /// an http://, https://, or gs:// URI, or a local file to upload
        #[arg(long = "test_wdl", required = true)]
        test_wdl: String,
        /// A local zip archive of the test WDL's dependencies, uploaded with
        /// it
        #[arg(long = "test_wdl_dependencies", default_value = "")]
        test_wdl_dependencies: String,
        /// The location of the eval WDL that evaluates the test WDL's
        /// outputs: an http://, https://, or gs:// URI, or a local file to
        /// upload
        #[arg(long = "eval_wdl", required = true)]
        eval_wdl: String,
        /// A local zip archive of the eval WDL's dependencies, uploaded with
        /// it
        #[arg(long = "eval_wdl_dependencies", default_value = "")]
        eval_wdl_dependencies: String,
        /// Email of the creator of the template.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update template with ID with the specified parameters
    Update {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The name of the template
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the template
        #[arg(long, default_value = "")]
        description: String,
        /// The location of the test WDL.  Updating this parameter is allowed
        /// only if the specified template has no non-failed runs associated
        /// with it
        #[arg(long = "test_wdl", default_value = "")]
        test_wdl: String,
        /// A local zip archive of the test WDL's dependencies
        #[arg(long = "test_wdl_dependencies", default_value = "")]
        test_wdl_dependencies: String,
        /// The location of the eval WDL.  Updating this parameter is allowed
        /// only if the specified template has no non-failed runs associated
        /// with it
        #[arg(long = "eval_wdl", default_value = "")]
        eval_wdl: String,
        /// A local zip archive of the eval WDL's dependencies
        #[arg(long = "eval_wdl_dependencies", default_value = "")]
        eval_wdl_dependencies: String,
    },
    /// Delete a template by its ID, if it has no tests associated with it
    Delete {
        /// The template's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve runs of the template specified by ID, filtered to match the
    /// specified parameters
    #[command(name = "find_runs")]
    FindRuns {
        /// The template's ID, a version 4 UUID
        id: String,
        #[command(flatten)]
        filters: RunFilterArgs,
    },
    /// Subscribe to receive notifications about the template specified by ID
    Subscribe {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The email address to receive notifications. If set, takes priority
        /// over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete subscription to the template with the specified ID and email
    Unsubscribe {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The email address to stop receiving notifications. If set, takes
        /// priority over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Map the template specified by ID to the result specified by RESULT_ID
    /// for RESULT_KEY in the output generated by that template
    #[command(name = "map_to_result")]
    MapToResult {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The result's ID, a version 4 UUID
        result_id: String,
        /// The key the result's value is filed under in the template's output
        result_key: String,
        /// Email of the creator of the mapping.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Retrieve the mapping record for the template specified by ID and the
    /// result specified by RESULT_ID
    #[command(name = "find_result_map_by_id")]
    FindResultMapById {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The result's ID, a version 4 UUID
        result_id: String,
    },
    /// Retrieve result mapping records for the template specified by ID,
    /// filtered to match the specified parameters
    #[command(name = "find_result_maps")]
    FindResultMaps {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The result's ID, a version 4 UUID
        #[arg(long = "result_id", default_value = "")]
        result_id: String,
        /// The key the result's value is filed under in the template's output
        #[arg(long = "result_key", default_value = "")]
        result_key: String,
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
    /// Delete the mapping record for the template specified by ID and the
    /// result specified by RESULT_ID
    #[command(name = "delete_result_map_by_id")]
    DeleteResultMapById {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The result's ID, a version 4 UUID
        result_id: String,
    },
    /// Map the template specified by ID to the report specified by REPORT_ID
    #[command(name = "map_to_report")]
    MapToReport {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
        /// Email of the creator of the mapping.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Retrieve the mapping record for the template specified by ID and the
    /// report specified by REPORT_ID
    #[command(name = "find_report_map_by_id")]
    FindReportMapById {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
    },
    /// Retrieve report mapping records for the template specified by ID,
    /// filtered to match the specified parameters
    #[command(name = "find_report_maps")]
    FindReportMaps {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        #[arg(long = "report_id", default_value = "")]
        report_id: String,
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
    /// Delete the mapping record for the template specified by ID and the
    /// report specified by REPORT_ID
    #[command(name = "delete_report_map_by_id")]
    DeleteReportMapById {
        /// The template's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
    },
}

/// Handle template commands
pub async fn handle_template_command(command: TemplateCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        TemplateCommands::FindById { id } => print_outcome(client.find_template_by_id(&id).await),
        TemplateCommands::Find {
            template_id,
            pipeline_id,
            name,
            pipeline_name,
            description,
            test_wdl,
            eval_wdl,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = TemplateQuery {
                template_id,
                pipeline_id,
                name,
                pipeline_name,
                description,
                test_wdl,
                eval_wdl,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_templates(query).await)
        }
        TemplateCommands::Create {
            name,
            pipeline_id,
            description,
            test_wdl,
            test_wdl_dependencies,
            eval_wdl,
            eval_wdl_dependencies,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let template = NewTemplate {
                name,
                pipeline_id,
                description,
                test_wdl,
                test_wdl_dependencies,
                eval_wdl,
                eval_wdl_dependencies,
                created_by,
            };
            print_outcome(client.create_template(template).await)
        }
        TemplateCommands::Update {
            id,
            name,
            description,
            test_wdl,
            test_wdl_dependencies,
            eval_wdl,
            eval_wdl_dependencies,
        } => {
            let update = TemplateUpdate {
                name,
                description,
                test_wdl,
                test_wdl_dependencies,
                eval_wdl,
                eval_wdl_dependencies,
            };
            print_outcome(client.update_template(&id, update).await)
        }
        TemplateCommands::Delete { id } => print_outcome(client.delete_template(&id).await),
        TemplateCommands::FindRuns { id, filters } => {
            print_outcome(client.find_template_runs(&id, filters.into()).await)
        }
        TemplateCommands::Subscribe { id, email } => {
            let email = email_or_exit(email, config, "Subscribing");
            print_outcome(client.subscribe_to_template(&id, &email).await)
        }
        TemplateCommands::Unsubscribe { id, email } => {
            let email = email_or_exit(email, config, "Unsubscribing");
            print_outcome(client.unsubscribe_from_template(&id, &email).await)
        }
        TemplateCommands::MapToResult {
            id,
            result_id,
            result_key,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            print_outcome(
                client
                    .map_template_to_result(&id, &result_id, &result_key, &created_by)
                    .await,
            )
        }
        TemplateCommands::FindResultMapById { id, result_id } => {
            print_outcome(client.find_template_result_map(&id, &result_id).await)
        }
        TemplateCommands::FindResultMaps {
            id,
            result_id,
            result_key,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = TemplateResultQuery {
                result_id,
                result_key,
                created_before,
                created_after,
                created_by,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_template_result_maps(&id, query).await)
        }
        TemplateCommands::DeleteResultMapById { id, result_id } => {
            print_outcome(client.delete_template_result_map(&id, &result_id).await)
        }
        TemplateCommands::MapToReport {
            id,
            report_id,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            print_outcome(
                client
                    .map_template_to_report(&id, &report_id, &created_by)
                    .await,
            )
        }
        TemplateCommands::FindReportMapById { id, report_id } => {
            print_outcome(client.find_template_report_map(&id, &report_id).await)
        }
        TemplateCommands::FindReportMaps {
            id,
            report_id,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = TemplateReportQuery {
                report_id,
                created_before,
                created_after,
                created_by,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_template_report_maps(&id, query).await)
        }
        TemplateCommands::DeleteReportMapById { id, report_id } => {
            print_outcome(client.delete_template_report_map(&id, &report_id).await)
        }
    }
}
