//! Template endpoints, including the template↔result and template↔report
//! mappings
//!
//! Template creates and updates are the one place the client distinguishes
//! remote WDL references from local files: values starting with `http://`,
//! `https://`, or `gs://` are sent inline, anything else is uploaded as a
//! multipart file part. Supplied dependency archives always upload.

use crate::body::{archive_value, wdl_value};
use crate::error::Result;
use crate::runs::RunQuery;
use crate::{CarrotClient, Params};

/// Filters for the template find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateQuery {
    pub template_id: String,
    pub pipeline_id: String,
    pub name: String,
    pub pipeline_name: String,
    pub description: String,
    pub test_wdl: String,
    pub eval_wdl: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TemplateQuery {
    fn default() -> Self {
        Self {
            template_id: String::new(),
            pipeline_id: String::new(),
            name: String::new(),
            pipeline_name: String::new(),
            description: String::new(),
            test_wdl: String::new(),
            eval_wdl: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl TemplateQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("template_id", self.template_id)
            .text("pipeline_id", self.pipeline_id)
            .text("name", self.name)
            .text("pipeline_name", self.pipeline_name)
            .text("description", self.description)
            .text("test_wdl", self.test_wdl)
            .text("eval_wdl", self.eval_wdl)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for template creation. The WDL fields accept a remote URI or a
/// local path; the dependency fields accept a local zip archive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTemplate {
    pub name: String,
    pub pipeline_id: String,
    pub description: String,
    pub test_wdl: String,
    pub test_wdl_dependencies: String,
    pub eval_wdl: String,
    pub eval_wdl_dependencies: String,
    pub created_by: String,
}

impl NewTemplate {
    fn into_params(self) -> Params {
        Params::new()
            .text("name", self.name)
            .text("pipeline_id", self.pipeline_id)
            .text("description", self.description)
            .value("test_wdl", wdl_value(self.test_wdl, "test.wdl"))
            .value(
                "test_wdl_dependencies",
                archive_value(self.test_wdl_dependencies, "test_dependencies.zip"),
            )
            .value("eval_wdl", wdl_value(self.eval_wdl, "eval.wdl"))
            .value(
                "eval_wdl_dependencies",
                archive_value(self.eval_wdl_dependencies, "eval_dependencies.zip"),
            )
            .text("created_by", self.created_by)
    }
}

/// Fields for template update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateUpdate {
    pub name: String,
    pub description: String,
    pub test_wdl: String,
    pub test_wdl_dependencies: String,
    pub eval_wdl: String,
    pub eval_wdl_dependencies: String,
}

impl TemplateUpdate {
    fn into_params(self) -> Params {
        Params::new()
            .text("name", self.name)
            .text("description", self.description)
            .value("test_wdl", wdl_value(self.test_wdl, "test.wdl"))
            .value(
                "test_wdl_dependencies",
                archive_value(self.test_wdl_dependencies, "test_dependencies.zip"),
            )
            .value("eval_wdl", wdl_value(self.eval_wdl, "eval.wdl"))
            .value(
                "eval_wdl_dependencies",
                archive_value(self.eval_wdl_dependencies, "eval_dependencies.zip"),
            )
    }
}

/// Filters for the template↔result mapping listing
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateResultQuery {
    pub result_id: String,
    pub result_key: String,
    pub created_before: String,
    pub created_after: String,
    pub created_by: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TemplateResultQuery {
    fn default() -> Self {
        Self {
            result_id: String::new(),
            result_key: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            created_by: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl TemplateResultQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("result_id", self.result_id)
            .text("result_key", self.result_key)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("created_by", self.created_by)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Filters for the template↔report mapping listing
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateReportQuery {
    pub report_id: String,
    pub created_before: String,
    pub created_after: String,
    pub created_by: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TemplateReportQuery {
    fn default() -> Self {
        Self {
            report_id: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            created_by: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl TemplateReportQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("report_id", self.report_id)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("created_by", self.created_by)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

impl CarrotClient {
    /// Retrieve a template by its ID
    pub async fn find_template_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("templates", id).await
    }

    /// Retrieve templates matching the supplied filters
    pub async fn find_templates(&self, query: TemplateQuery) -> Result<String> {
        self.find("templates", query.into_params()).await
    }

    /// Create a template, uploading any local WDLs or dependency archives
    pub async fn create_template(&self, template: NewTemplate) -> Result<String> {
        self.create("templates", template.into_params()).await
    }

    /// Update the template with the given ID
    pub async fn update_template(&self, id: &str, update: TemplateUpdate) -> Result<String> {
        self.update("templates", id, update.into_params()).await
    }

    /// Delete the template with the given ID
    pub async fn delete_template(&self, id: &str) -> Result<String> {
        self.delete("templates", id).await
    }

    /// Subscribe an email address to the template with the given ID
    pub async fn subscribe_to_template(&self, id: &str, email: &str) -> Result<String> {
        self.subscribe("templates", id, email).await
    }

    /// Remove an email address's subscription to the template with the given
    /// ID
    pub async fn unsubscribe_from_template(&self, id: &str, email: &str) -> Result<String> {
        self.unsubscribe("templates", id, email).await
    }

    /// Retrieve runs of the template with the given ID
    pub async fn find_template_runs(&self, id: &str, query: RunQuery) -> Result<String> {
        self.find_runs("templates", id, query.into_params()).await
    }

    /// Map a template to a result for a key in the template's output
    pub async fn map_template_to_result(
        &self,
        template_id: &str,
        result_id: &str,
        result_key: &str,
        created_by: &str,
    ) -> Result<String> {
        let params = Params::new()
            .text("result_key", result_key)
            .text("created_by", created_by);
        self.create_map(
            "templates",
            template_id,
            "results",
            result_id,
            params,
            Params::new(),
        )
        .await
    }

    /// Retrieve the mapping between a template and a result
    pub async fn find_template_result_map(
        &self,
        template_id: &str,
        result_id: &str,
    ) -> Result<String> {
        self.find_map_by_ids("templates", template_id, "results", result_id)
            .await
    }

    /// Retrieve result mappings for a template, filtered by the supplied
    /// params
    pub async fn find_template_result_maps(
        &self,
        template_id: &str,
        query: TemplateResultQuery,
    ) -> Result<String> {
        self.find_maps("templates", template_id, "results", query.into_params())
            .await
    }

    /// Delete the mapping between a template and a result
    pub async fn delete_template_result_map(
        &self,
        template_id: &str,
        result_id: &str,
    ) -> Result<String> {
        self.delete_map_by_ids("templates", template_id, "results", result_id)
            .await
    }

    /// Map a template to a report
    pub async fn map_template_to_report(
        &self,
        template_id: &str,
        report_id: &str,
        created_by: &str,
    ) -> Result<String> {
        let params = Params::new().text("created_by", created_by);
        self.create_map(
            "templates",
            template_id,
            "reports",
            report_id,
            params,
            Params::new(),
        )
        .await
    }

    /// Retrieve the mapping between a template and a report
    pub async fn find_template_report_map(
        &self,
        template_id: &str,
        report_id: &str,
    ) -> Result<String> {
        self.find_map_by_ids("templates", template_id, "reports", report_id)
            .await
    }

    /// Retrieve report mappings for a template, filtered by the supplied
    /// params
    pub async fn find_template_report_maps(
        &self,
        template_id: &str,
        query: TemplateReportQuery,
    ) -> Result<String> {
        self.find_maps("templates", template_id, "reports", query.into_params())
            .await
    }

    /// Delete the mapping between a template and a report
    pub async fn delete_template_report_map(
        &self,
        template_id: &str,
        report_id: &str,
    ) -> Result<String> {
        self.delete_map_by_ids("templates", template_id, "reports", report_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_remote_wdl_stays_inline() {
        let params = NewTemplate {
            name: "Catra template".to_string(),
            pipeline_id: "3d1bfbab-d9ec-46c7-aa8e-9c1d1808f2b8".to_string(),
            test_wdl: "http://example.com/x.wdl".to_string(),
            eval_wdl: "gs://bucket/eval.wdl".to_string(),
            created_by: "catra@example.com".to_string(),
            ..Default::default()
        }
        .into_params()
        .filtered();

        for (name, value) in params.iter() {
            assert!(
                matches!(value, ParamValue::Text(_)),
                "{name} should be an inline parameter"
            );
        }
    }

    #[test]
    fn test_local_wdl_becomes_upload() {
        let params = NewTemplate {
            name: "Catra template".to_string(),
            test_wdl: "/local/x.wdl".to_string(),
            ..Default::default()
        }
        .into_params()
        .filtered();

        let (_, value) = params
            .iter()
            .find(|(name, _)| *name == "test_wdl")
            .expect("test_wdl should survive filtering");
        assert!(matches!(value, ParamValue::File { filename: "test.wdl", .. }));
    }

    #[test]
    fn test_update_filters_unset_fields() {
        let params = TemplateUpdate {
            description: "This template has problems with misdirected aggression".to_string(),
            ..Default::default()
        }
        .into_params()
        .filtered();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["description"]);
    }
}
