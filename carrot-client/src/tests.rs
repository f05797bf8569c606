//! Test endpoints
//!
//! A "test" pairs a template with default inputs for its test and eval WDLs.
//! Input defaults and run inputs arrive as parsed JSON (the CLI reads the
//! files); they are never subject to empty-string filtering.

use serde_json::Value;

use crate::error::Result;
use crate::runs::RunQuery;
use crate::{CarrotClient, Params};

/// Filters for the test find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct TestQuery {
    pub test_id: String,
    pub template_id: String,
    pub name: String,
    pub template_name: String,
    pub description: String,
    pub test_input_defaults: String,
    pub eval_input_defaults: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TestQuery {
    fn default() -> Self {
        Self {
            test_id: String::new(),
            template_id: String::new(),
            name: String::new(),
            template_name: String::new(),
            description: String::new(),
            test_input_defaults: String::new(),
            eval_input_defaults: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl TestQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("test_id", self.test_id)
            .text("template_id", self.template_id)
            .text("name", self.name)
            .text("template_name", self.template_name)
            .text("description", self.description)
            .text("test_input_defaults", self.test_input_defaults)
            .text("eval_input_defaults", self.eval_input_defaults)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for test creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTest {
    pub name: String,
    pub template_id: String,
    pub description: String,
    pub test_input_defaults: Option<Value>,
    pub eval_input_defaults: Option<Value>,
    pub created_by: String,
}

/// Fields for test update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestUpdate {
    pub name: String,
    pub description: String,
}

/// Fields for starting a run of a test
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRun {
    pub name: String,
    pub test_input: Option<Value>,
    pub eval_input: Option<Value>,
    pub created_by: String,
}

impl CarrotClient {
    /// Retrieve a test by its ID
    pub async fn find_test_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("tests", id).await
    }

    /// Retrieve tests matching the supplied filters
    pub async fn find_tests(&self, query: TestQuery) -> Result<String> {
        self.find("tests", query.into_params()).await
    }

    /// Create a test
    pub async fn create_test(&self, test: NewTest) -> Result<String> {
        let params = Params::new()
            .text("name", test.name)
            .text("template_id", test.template_id)
            .text("description", test.description)
            .json("test_input_defaults", test.test_input_defaults)
            .json("eval_input_defaults", test.eval_input_defaults)
            .text("created_by", test.created_by);
        self.create("tests", params).await
    }

    /// Update the test with the given ID
    pub async fn update_test(&self, id: &str, update: TestUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description);
        self.update("tests", id, params).await
    }

    /// Delete the test with the given ID
    pub async fn delete_test(&self, id: &str) -> Result<String> {
        self.delete("tests", id).await
    }

    /// Start a run of the test with the given ID
    pub async fn run_test(&self, id: &str, run: NewRun) -> Result<String> {
        let params = Params::new()
            .text("name", run.name)
            .json("test_input", run.test_input)
            .json("eval_input", run.eval_input)
            .text("created_by", run.created_by);
        self.run(id, params).await
    }

    /// Retrieve runs of the test with the given ID
    pub async fn find_test_runs(&self, id: &str, query: RunQuery) -> Result<String> {
        self.find_runs("tests", id, query.into_params()).await
    }

    /// Subscribe an email address to the test with the given ID
    pub async fn subscribe_to_test(&self, id: &str, email: &str) -> Result<String> {
        self.subscribe("tests", id, email).await
    }

    /// Remove an email address's subscription to the test with the given ID
    pub async fn unsubscribe_from_test(&self, id: &str, email: &str) -> Result<String> {
        self.unsubscribe("tests", id, email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = TestQuery::default();
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_query_orders_filters_before_pagination() {
        let params = TestQuery {
            template_name: "Catra template".to_string(),
            ..Default::default()
        }
        .into_params()
        .filtered();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["template_name", "limit", "offset"]);
    }
}
