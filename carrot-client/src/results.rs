//! Result-definition endpoints

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the result find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ResultQuery {
    pub result_id: String,
    pub name: String,
    pub description: String,
    pub result_type: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ResultQuery {
    fn default() -> Self {
        Self {
            result_id: String::new(),
            name: String::new(),
            description: String::new(),
            result_type: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl ResultQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("result_id", self.result_id)
            .text("name", self.name)
            .text("description", self.description)
            .text("result_type", self.result_type)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for result creation; `result_type` is numeric, file, or text
/// (validated by the server)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewResult {
    pub name: String,
    pub description: String,
    pub result_type: String,
    pub created_by: String,
}

/// Fields for result update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultUpdate {
    pub name: String,
    pub description: String,
}

impl CarrotClient {
    /// Retrieve a result definition by its ID
    pub async fn find_result_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("results", id).await
    }

    /// Retrieve result definitions matching the supplied filters
    pub async fn find_results(&self, query: ResultQuery) -> Result<String> {
        self.find("results", query.into_params()).await
    }

    /// Create a result definition
    pub async fn create_result(&self, result: NewResult) -> Result<String> {
        let params = Params::new()
            .text("name", result.name)
            .text("description", result.description)
            .text("result_type", result.result_type)
            .text("created_by", result.created_by);
        self.create("results", params).await
    }

    /// Update the result definition with the given ID
    pub async fn update_result(&self, id: &str, update: ResultUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description);
        self.update("results", id, params).await
    }

    /// Delete the result definition with the given ID
    pub async fn delete_result(&self, id: &str) -> Result<String> {
        self.delete("results", id).await
    }
}
