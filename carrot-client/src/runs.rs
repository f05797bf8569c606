//! Run endpoints, including the run↔report mapping
//!
//! Runs are created through `POST /tests/{id}/runs` (see [`crate::tests`])
//! and listed through the nested `runs` resource of pipelines, templates,
//! and tests, so the query filters here are shared by all three.

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for nested run listings
#[derive(Debug, Clone, PartialEq)]
pub struct RunQuery {
    pub name: String,
    pub status: String,
    pub test_input: String,
    pub eval_input: String,
    pub test_cromwell_job_id: String,
    pub eval_cromwell_job_id: String,
    pub created_before: String,
    pub created_after: String,
    pub created_by: String,
    pub finished_before: String,
    pub finished_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for RunQuery {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: String::new(),
            test_input: String::new(),
            eval_input: String::new(),
            test_cromwell_job_id: String::new(),
            eval_cromwell_job_id: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            created_by: String::new(),
            finished_before: String::new(),
            finished_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl RunQuery {
    pub(crate) fn into_params(self) -> Params {
        Params::new()
            .text("name", self.name)
            .text("status", self.status)
            .text("test_input", self.test_input)
            .text("eval_input", self.eval_input)
            .text("test_cromwell_job_id", self.test_cromwell_job_id)
            .text("eval_cromwell_job_id", self.eval_cromwell_job_id)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("created_by", self.created_by)
            .text("finished_before", self.finished_before)
            .text("finished_after", self.finished_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Filters for the run↔report mapping listing
#[derive(Debug, Clone, PartialEq)]
pub struct RunReportQuery {
    pub report_id: String,
    pub status: String,
    pub cromwell_job_id: String,
    pub results: String,
    pub created_before: String,
    pub created_after: String,
    pub created_by: String,
    pub finished_before: String,
    pub finished_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for RunReportQuery {
    fn default() -> Self {
        Self {
            report_id: String::new(),
            status: String::new(),
            cromwell_job_id: String::new(),
            results: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            created_by: String::new(),
            finished_before: String::new(),
            finished_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl RunReportQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("report_id", self.report_id)
            .text("status", self.status)
            .text("cromwell_job_id", self.cromwell_job_id)
            .text("results", self.results)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("created_by", self.created_by)
            .text("finished_before", self.finished_before)
            .text("finished_after", self.finished_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

impl CarrotClient {
    /// Retrieve a run by its ID
    pub async fn find_run_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("runs", id).await
    }

    /// Delete the run with the given ID
    pub async fn delete_run(&self, id: &str) -> Result<String> {
        self.delete("runs", id).await
    }

    /// Start a report-generation job for a run. `delete_failed` travels as a
    /// query parameter; the creator goes in the body.
    pub async fn create_run_report_map(
        &self,
        run_id: &str,
        report_id: &str,
        created_by: &str,
        delete_failed: bool,
    ) -> Result<String> {
        let params = Params::new().text("created_by", created_by);
        let query = Params::new().flag("delete_failed", delete_failed);
        self.create_map("runs", run_id, "reports", report_id, params, query)
            .await
    }

    /// Retrieve the report record for a run and report pair
    pub async fn find_run_report_map(&self, run_id: &str, report_id: &str) -> Result<String> {
        self.find_map_by_ids("runs", run_id, "reports", report_id).await
    }

    /// Retrieve report records for a run, filtered by the supplied params
    pub async fn find_run_report_maps(&self, run_id: &str, query: RunReportQuery) -> Result<String> {
        self.find_maps("runs", run_id, "reports", query.into_params())
            .await
    }

    /// Delete the report record for a run and report pair
    pub async fn delete_run_report_map(&self, run_id: &str, report_id: &str) -> Result<String> {
        self.delete_map_by_ids("runs", run_id, "reports", report_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_query_defaults() {
        let query = RunQuery::default();
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_run_query_filters_unset_fields() {
        let params = RunQuery {
            status: "succeeded".to_string(),
            ..Default::default()
        }
        .into_params()
        .filtered();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["status", "limit", "offset"]);
    }
}
