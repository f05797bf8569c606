//! Subscription command handlers

use anyhow::Result;
use carrot_client::subscriptions::SubscriptionQuery;
use clap::Subcommand;

use crate::commands::print_outcome;
use crate::config::Config;

/// Subscription subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Retrieve a subscription by its ID
    #[command(name = "find_by_id")]
    FindById {
        /// The subscription's ID, a version 4 UUID
        id: String,
    },
    /// Retrieve subscriptions filtered to match the specified parameters
    Find {
        /// The subscription's ID, a version 4 UUID
        #[arg(long = "subscription_id", default_value = "")]
        subscription_id: String,
        /// The type of the entity subscribed to (pipeline, template, or test)
        #[arg(long = "entity_type", default_value = "")]
        entity_type: String,
        /// The entity's ID, a version 4 UUID
        #[arg(long = "entity_id", default_value = "")]
        entity_id: String,
        /// Upper bound for subscription's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_before", default_value = "")]
        created_before: String,
        /// Lower bound for subscription's created_at value, in the format
        /// YYYY-MM-DDThh:mm:ss.ssssss
        #[arg(long = "created_after", default_value = "")]
        created_after: String,
        /// Email of the subscriber, case-sensitive
        #[arg(long, default_value = "")]
        email: String,
        /// A comma-separated list of sort keys, enclosed in asc() for
        /// ascending or desc() for descending.  Ex.
        /// asc(entity_type),desc(entity_id)
        #[arg(long, default_value = "")]
        sort: String,
        /// The maximum number of subscription records to return
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// The offset to start at within the list of records to return
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
}

/// Handle subscription commands
pub async fn handle_subscription_command(
    command: SubscriptionCommands,
    config: &Config,
) -> Result<()> {
    let client = config.client();

    match command {
        SubscriptionCommands::FindById { id } => {
            print_outcome(client.find_subscription_by_id(&id).await)
        }
        SubscriptionCommands::Find {
            subscription_id,
            entity_type,
            entity_id,
            created_before,
            created_after,
            email,
            sort,
            limit,
            offset,
        } => {
            let query = SubscriptionQuery {
                subscription_id,
                entity_type,
                entity_id,
                created_before,
                created_after,
                email,
                sort,
                limit,
                offset,
            };
            print_outcome(client.find_subscriptions(query).await)
        }
    }
}
