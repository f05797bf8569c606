//! Pipeline endpoints

use crate::error::Result;
use crate::runs::RunQuery;
use crate::{CarrotClient, Params};

/// Filters for the pipeline find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineQuery {
    pub pipeline_id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for PipelineQuery {
    fn default() -> Self {
        Self {
            pipeline_id: String::new(),
            name: String::new(),
            description: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl PipelineQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("pipeline_id", self.pipeline_id)
            .text("name", self.name)
            .text("description", self.description)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for pipeline creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPipeline {
    pub name: String,
    pub description: String,
    pub created_by: String,
}

/// Fields for pipeline update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineUpdate {
    pub name: String,
    pub description: String,
}

impl CarrotClient {
    /// Retrieve a pipeline by its ID
    pub async fn find_pipeline_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("pipelines", id).await
    }

    /// Retrieve pipelines matching the supplied filters
    pub async fn find_pipelines(&self, query: PipelineQuery) -> Result<String> {
        self.find("pipelines", query.into_params()).await
    }

    /// Create a pipeline
    pub async fn create_pipeline(&self, pipeline: NewPipeline) -> Result<String> {
        let params = Params::new()
            .text("name", pipeline.name)
            .text("description", pipeline.description)
            .text("created_by", pipeline.created_by);
        self.create("pipelines", params).await
    }

    /// Update the pipeline with the given ID
    pub async fn update_pipeline(&self, id: &str, update: PipelineUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description);
        self.update("pipelines", id, params).await
    }

    /// Delete the pipeline with the given ID
    pub async fn delete_pipeline(&self, id: &str) -> Result<String> {
        self.delete("pipelines", id).await
    }

    /// Subscribe an email address to the pipeline with the given ID
    pub async fn subscribe_to_pipeline(&self, id: &str, email: &str) -> Result<String> {
        self.subscribe("pipelines", id, email).await
    }

    /// Remove an email address's subscription to the pipeline with the given
    /// ID
    pub async fn unsubscribe_from_pipeline(&self, id: &str, email: &str) -> Result<String> {
        self.unsubscribe("pipelines", id, email).await
    }

    /// Retrieve runs of the pipeline with the given ID
    pub async fn find_pipeline_runs(&self, id: &str, query: RunQuery) -> Result<String> {
        self.find_runs("pipelines", id, query.into_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_query_defaults_to_first_page() {
        let query = PipelineQuery::default();
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_query_params_keep_pagination_after_filtering() {
        let params = PipelineQuery::default().into_params().filtered();
        let entries: Vec<_> = params.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![
                ("limit", ParamValue::Number(20)),
                ("offset", ParamValue::Number(0)),
            ]
        );
    }
}
