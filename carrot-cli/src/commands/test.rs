//! Test command handlers
//!
//! The input-defaults and run-input flags name local JSON files; they are
//! read and parsed here, before the client is involved, so a bad file never
//! produces a network call.

use anyhow::Result;
use carrot_client::tests::{NewRun, NewTest, TestQuery, TestUpdate};
use clap::Subcommand;

use crate::commands::run::RunFilterArgs;
use crate::commands::{created_by_or_exit, email_or_exit, print_outcome, read_json_input};
use crate::config::Config;

/// Test subcommands
#[derive(Subcommand)]
pub enum TestCommands {
    /// Retrieve a test by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The test's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve tests filtered to match the specified parameters
    Find {
        /// The test's ID, a version 4 UUID
        #[arg(long = "test_id", default_value = "")]
        test_id: String,
        /// The ID of the template that is the test's parent, a version 4 UUID
        #[arg(long = "template_id", default_value = "")]
        template_id: String,
        /// The name of the test, case-sensitive
        #[arg(long, default_value = "")]
        name: String,
        /// The name of the template that is the test's parent, case-sensitive
        #[arg(long = "template_name", default_value = "")]
        template_name: String,
        /// The description of the test, case-sensitive
        #[arg(long, default_value = "")]
        description: String,
        /// The default inputs to the test WDL for the test
        #[arg(long = "test_input_defaults", default_value = "")]
        test_input_defaults: String,
        /// The default inputs to the eval WDL for the test
        #[arg(long = "eval_input_defaults", default_value = "")]
        eval_input_defaults: String,
        /// Upper bound for test's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for test's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the creator of the test, case-sensitive
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex. asc(name),desc(created_at)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of test records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Create test with the specified parameters
    Create {
        /// The name of the test
        #[arg(long, required = true)]
        name: String,
        /// The ID of the template that will be the test's parent, a version 4
        /// UUID
        #[arg(long = "template_id", required = true)]
        template_id: String,
        /// The description of the test
        #[arg(long, default_value = "")]
        description: String,
        /// A JSON file containing the default inputs to the test WDL for the
        /// test
        #[arg(long = "test_input_defaults", default_value = "")]
        test_input_defaults: String,
        /// A JSON file containing the default inputs to the eval WDL for the
        /// test
        #[arg(long = "eval_input_defaults", default_value = "")]
        eval_input_defaults: String,
        /// Email of the creator of the test.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Update test with ID with the specified parameters
    Update {
        /// The test's ID, a version 4 UUID
        id: String,
        /// The name of the test
        #[arg(long, default_value = "")]
        name: String,
        /// The description of the test
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a test by its ID, if it has no runs associated with it
    Delete {
        /// The test's ID, a version 4 UUID
        id: String,
    },
    /// Start a run for the test specified by ID with the specified params
    Run {
        /// The test's ID, a version 4 UUID
        id: String,
        /// The name of the run.  Will be autogenerated if not specified
        #[arg(long, default_value = "")]
        name: String,
        /// A JSON file containing the inputs to the test WDL for the run
        #[arg(long = "test_input", default_value = "")]
        test_input: String,
        /// A JSON file containing the inputs to the eval WDL for the run
        #[arg(long = "eval_input", default_value = "")]
        eval_input: String,
        /// Email of the creator of the run.  Defaults to email config
        /// variable
        #[arg(long = "created_by", default_value = "")]
        created_by: String,
    },
    /// Retrieve runs of the test specified by ID, filtered to match the
    /// specified parameters
    #[command(name = "find_runs")]
    FindRuns {
        /// The test's ID, a version 4 UUID
        id: String,
        #[command(flatten)]
        filters: RunFilterArgs,
    },
    /// Subscribe to receive notifications about the test specified by ID
    Subscribe {
        /// The test's ID, a version 4 UUID
        id: String,
        /// The email address to receive notifications. If set, takes priority
        /// over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Delete subscription to the test with the specified ID and email
    Unsubscribe {
        /// The test's ID, a version 4 UUID
        id: String,
        /// The email address to stop receiving notifications. If set, takes
        /// priority over email config variable
        #[arg(long, default_value = "")]
        email: String,
    },
}

/// Handle test commands
pub async fn handle_test_command(command: TestCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        TestCommands::FindById { id } => print_outcome(client.find_test_by_id(&id).await),
        TestCommands::Find {
            test_id,
            template_id,
            name,
            template_name,
            description,
            test_input_defaults,
            eval_input_defaults,
            created_before,
            created_after,
            created_by,
            sort,
            limit,
            offset,
        } => {
            let query = TestQuery {
                test_id,
                template_id,
                name,
                template_name,
                description,
                test_input_defaults,
                eval_input_defaults,
                created_by,
                created_before,
                created_after,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_tests(query).await)
        }
        TestCommands::Create {
            name,
            template_id,
            description,
            test_input_defaults,
            eval_input_defaults,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let test = NewTest {
                name,
                template_id,
                description,
                test_input_defaults: read_json_input(&test_input_defaults, "--test_input_defaults"),
                eval_input_defaults: read_json_input(&eval_input_defaults, "--eval_input_defaults"),
                created_by,
            };
            print_outcome(client.create_test(test).await)
        }
        TestCommands::Update {
            id,
            name,
            description,
        } => {
            let update = TestUpdate { name, description };
            print_outcome(client.update_test(&id, update).await)
        }
        TestCommands::Delete { id } => print_outcome(client.delete_test(&id).await),
        TestCommands::Run {
            id,
            name,
            test_input,
            eval_input,
            created_by,
        } => {
            let created_by = created_by_or_exit(created_by, config);
            let run = NewRun {
                name,
                test_input: read_json_input(&test_input, "--test_input"),
                eval_input: read_json_input(&eval_input, "--eval_input"),
                created_by,
            };
            print_outcome(client.run_test(&id, run).await)
        }
        TestCommands::FindRuns { id, filters } => {
            print_outcome(client.find_test_runs(&id, filters.into()).await)
        }
        TestCommands::Subscribe { id, email } => {
            let email = email_or_exit(email, config, "Subscribing");
            print_outcome(client.subscribe_to_test(&id, &email).await)
        }
        TestCommands::Unsubscribe { id, email } => {
            let email = email_or_exit(email, config, "Unsubscribing");
            print_outcome(client.unsubscribe_from_test(&id, &email).await)
        }
    }
}
