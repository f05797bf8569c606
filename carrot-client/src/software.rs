//! Software endpoints

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the software find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareQuery {
    pub software_id: String,
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for SoftwareQuery {
    fn default() -> Self {
        Self {
            software_id: String::new(),
            name: String::new(),
            description: String::new(),
            repository_url: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl SoftwareQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("software_id", self.software_id)
            .text("name", self.name)
            .text("description", self.description)
            .text("repository_url", self.repository_url)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for software creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSoftware {
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub created_by: String,
}

/// Fields for software update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoftwareUpdate {
    pub name: String,
    pub description: String,
}

impl CarrotClient {
    /// Retrieve a software record by its ID
    pub async fn find_software_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("software", id).await
    }

    /// Retrieve software records matching the supplied filters
    pub async fn find_software(&self, query: SoftwareQuery) -> Result<String> {
        self.find("software", query.into_params()).await
    }

    /// Create a software record
    pub async fn create_software(&self, software: NewSoftware) -> Result<String> {
        let params = Params::new()
            .text("name", software.name)
            .text("description", software.description)
            .text("repository_url", software.repository_url)
            .text("created_by", software.created_by);
        self.create("software", params).await
    }

    /// Update the software record with the given ID
    pub async fn update_software(&self, id: &str, update: SoftwareUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description);
        self.update("software", id, params).await
    }
}
