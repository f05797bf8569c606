//! Subscription endpoints
//!
//! Subscription records are created and deleted through the per-entity
//! subscribe/unsubscribe operations; this module only searches them.

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the subscription find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionQuery {
    pub subscription_id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub created_before: String,
    pub created_after: String,
    pub email: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for SubscriptionQuery {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            entity_type: String::new(),
            entity_id: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            email: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl SubscriptionQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("subscription_id", self.subscription_id)
            .text("entity_type", self.entity_type)
            .text("entity_id", self.entity_id)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("email", self.email)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

impl CarrotClient {
    /// Retrieve a subscription by its ID
    pub async fn find_subscription_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("subscriptions", id).await
    }

    /// Retrieve subscriptions matching the supplied filters
    pub async fn find_subscriptions(&self, query: SubscriptionQuery) -> Result<String> {
        self.find("subscriptions", query.into_params()).await
    }
}
