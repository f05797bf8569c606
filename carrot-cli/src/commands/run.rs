//! Run command handlers
//!
//! Runs are created via `carrot test run`; this group searches and deletes
//! existing runs and manages their generated reports. The run filter options
//! are shared with the `find_runs` subcommands of pipeline, template, and
//! test.

use anyhow::Result;
use carrot_client::runs::{RunQuery, RunReportQuery};
use clap::{Args, Subcommand};

use crate::commands::{created_by_or_exit, print_outcome};
use crate::config::Config;

/// Filter options for run listings
#[derive(Args, Debug, Default)]
pub struct RunFilterArgs {
    /// The name of the run
    #[arg(long, default_value = "")]
    pub name: String,

    /// The status of the run. Statuses include: aborted, building, created,
    /// failed, queued_in_cromwell, running, starting, submitted, succeeded,
    /// waiting_for_queue_space
    #[arg(long, default_value = "")]
    pub status: String,

    /// A JSON file containing the inputs to the test WDL for the run
    #[arg(long = "test_input", default_value = "")]
    pub test_input: String,

    /// A JSON file containing the inputs to the eval WDL for the run
    #[arg(long = "eval_input", default_value = "")]
    pub eval_input: String,

    /// The unique ID assigned to the Cromwell job in which the test WDL ran
    #[arg(long = "test_cromwell_job_id", default_value = "")]
    pub test_cromwell_job_id: String,

    /// The unique ID assigned to the Cromwell job in which the eval WDL ran
    #[arg(long = "eval_cromwell_job_id", default_value = "")]
    pub eval_cromwell_job_id: String,

    /// Upper bound for run's created_at value, in the format
    /// YYYY-MM-DDThh:mm:ss.ssssss
    #[arg(long = "created_before", default_value = "")]
    pub created_before: String,

    /// Lower bound for run's created_at value, in the format
    /// YYYY-MM-DDThh:mm:ss.ssssss
    #[arg(long = "created_after", default_value = "")]
    pub created_after: String,

    /// Email of the creator of the run
    #[arg(long = "created_by", default_value = "")]
    pub created_by: String,

    /// Upper bound for run's finished_at value, in the format
    /// YYYY-MM-DDThh:mm:ss.ssssss
    #[arg(long = "finished_before", default_value = "")]
    pub finished_before: String,

    /// Lower bound for run's finished_at value, in the format
    /// YYYY-MM-DDThh:mm:ss.ssssss
    #[arg(long = "finished_after", default_value = "")]
    pub finished_after: String,

    /// A comma-separated list of sort keys, enclosed in asc() for ascending
    /// or desc() for descending.  Ex. asc(status),desc(created_at)
    #[arg(long, default_value = "")]
    pub sort: String,

    /// The maximum number of run records to return
    #[arg(long, default_value_t = 20)]
    pub limit: i64,

    /// The offset to start at within the list of records to return
    #[arg(long, default_value_t = 0)]
    pub offset: i64,
}

impl From<RunFilterArgs> for RunQuery {
    fn from(args: RunFilterArgs) -> Self {
        Self {
            name: args.name,
            status: args.status,
            test_input: args.test_input,
            eval_input: args.eval_input,
            test_cromwell_job_id: args.test_cromwell_job_id,
            eval_cromwell_job_id: args.eval_cromwell_job_id,
            created_before: args.created_before,
            created_after: args.created_after,
            created_by: args.created_by,
            finished_before: args.finished_before,
            finished_after: args.finished_after,
            sort: args.sort,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

/// Run subcommands
#[derive(Subcommand)]
pub enum RunCommands {
    /// Retrieve a run by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The run's ID, a version 4 UUID
        id: String,
    },
    /// Delete a run by its ID, if the run has a failed status
    Delete {
        /// The run's ID, a version 4 UUID
        id: String,
    },
    /// Start a job to generate a filled report using data from the run
    /// specified by ID with the report specified by REPORT_ID
    #[command(name = "create_report")]
    CreateReport {
        /// The run's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
        /// Email of the creator of the mapping.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// If set, and there is a failed record for this run with this
        /// report, overwrite that record
        #[arg(long = "delete_failed")]
        delete_failed: bool,
    },
    /// Retrieve the report record for the run specified by ID and the report
    /// specified by REPORT_ID
    #[command(name = "find_report_by_ids")]
    FindReportByIds {
        /// The run's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
    },
    /// Retrieve report records for the run specified by ID, filtered to match
    /// the specified parameters
    #[command(name = "find_reports")]
    FindReports {
        /// The run's ID, a version 4 UUID
        id: String,
        /// The ID of the report
        #[arg(long = "report_id", default_value = "")]
        report_id: String,
        /// The status of the job generating the report
        #[arg(long, default_value = "")]
        status: String,
        /// The ID for the Cromwell job generating the filled report
        #[arg(long = "cromwell_job_id", default_value = "")]
        cromwell_job_id: String,
        /// The results of the report job
        #[arg(long, default_value = "")]
        results: String,
        /// Upper bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for the record's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the record
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// Upper bound for the record's finished_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "finished_before", default_value = "")]
        finished_before: String,
        /// Lower bound for the record's finished_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "finished_after", default_value = "")]
        finished_after: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Delete the report record for the run specified by ID and the report
    /// specified by REPORT_ID
    #[command(name = "delete_report_by_ids")]
    DeleteReportByIds {
        /// The run's ID, a version 4 UUID
        id: String,
        /// The report's ID, a version 4 UUID
        report_id: String,
    },
}

/// Handle run commands
pub async fn handle_run_command(command: RunCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        RunCommands::FindById { id } => print_outcome(client.find_run_by_id(&id).await),
        RunCommands::Delete { id } => print_outcome(client.delete_run(&id).await),
        RunCommands::CreateReport {
            id,
            report_id,
            created_by,
            delete_failed,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            print_outcome(
                client
                    .create_run_report_map(&id, &report_id, &created_by, delete_failed)
                    .await,
            )
        }
        RunCommands::FindReportByIds { id, report_id } => {
            print_outcome(client.find_run_report_map(&id, &report_id).await)
        }
        RunCommands::FindReports {
            id,
            report_id,
            status,
            cromwell_job_id,
            results,
            created_before,
            created_after,
            created_by,
            finished_before,
            finished_after,
            sort,
            limit,
            offset,
        } => {
            let query = RunReportQuery {
                report_id,
                status,
                cromwell_job_id,
                results,
                created_before,
                created_after,
                created_by,
                finished_before,
                finished_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_run_report_maps(&id, query).await)
        }
        RunCommands::DeleteReportByIds { id, report_id } => {
            print_outcome(client.delete_run_report_map(&id, &report_id).await)
        }
    }
}
