//! Report endpoints, including the report↔section mapping
//!
//! Report↔section mappings are keyed by both ids and the section's name
//! within the report, so the single-record find and delete operations carry
//! the name as a final path segment.

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the report find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    pub report_id: String,
    pub name: String,
    pub description: String,
    pub metadata: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            report_id: String::new(),
            name: String::new(),
            description: String::new(),
            metadata: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl ReportQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("report_id", self.report_id)
            .text("name", self.name)
            .text("description", self.description)
            .text("metadata", self.metadata)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for report creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReport {
    pub name: String,
    pub description: String,
    pub created_by: String,
}

/// Fields for report update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportUpdate {
    pub name: String,
    pub description: String,
}

/// Filters for the report↔section mapping listing
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSectionQuery {
    pub section_id: String,
    pub name: String,
    pub position: Option<i64>,
    pub created_before: String,
    pub created_after: String,
    pub created_by: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ReportSectionQuery {
    fn default() -> Self {
        Self {
            section_id: String::new(),
            name: String::new(),
            position: None,
            created_before: String::new(),
            created_after: String::new(),
            created_by: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl ReportSectionQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("section_id", self.section_id)
            .text("name", self.name)
            .opt_number("position", self.position)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("created_by", self.created_by)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

impl CarrotClient {
    /// Retrieve a report by its ID
    pub async fn find_report_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("reports", id).await
    }

    /// Retrieve reports matching the supplied filters
    pub async fn find_reports(&self, query: ReportQuery) -> Result<String> {
        self.find("reports", query.into_params()).await
    }

    /// Create a report
    pub async fn create_report(&self, report: NewReport) -> Result<String> {
        let params = Params::new()
            .text("name", report.name)
            .text("description", report.description)
            .text("created_by", report.created_by);
        self.create("reports", params).await
    }

    /// Update the report with the given ID
    pub async fn update_report(&self, id: &str, update: ReportUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description);
        self.update("reports", id, params).await
    }

    /// Delete the report with the given ID
    pub async fn delete_report(&self, id: &str) -> Result<String> {
        self.delete("reports", id).await
    }

    /// Map a section into a report at a position
    pub async fn map_report_to_section(
        &self,
        report_id: &str,
        section_id: &str,
        name: &str,
        position: i64,
        created_by: &str,
    ) -> Result<String> {
        let params = Params::new()
            .text("name", name)
            .number("position", position)
            .text("created_by", created_by);
        self.create_map(
            "reports",
            report_id,
            "sections",
            section_id,
            params,
            Params::new(),
        )
        .await
    }

    /// Retrieve the mapping for a report, section, and name
    pub async fn find_report_section_map(
        &self,
        report_id: &str,
        section_id: &str,
        name: &str,
    ) -> Result<String> {
        self.find_map_by_ids_and_name("reports", report_id, "sections", section_id, name)
            .await
    }

    /// Retrieve section mappings for a report, filtered by the supplied
    /// params
    pub async fn find_report_section_maps(
        &self,
        report_id: &str,
        query: ReportSectionQuery,
    ) -> Result<String> {
        self.find_maps("reports", report_id, "sections", query.into_params())
            .await
    }

    /// Delete the mapping for a report, section, and name
    pub async fn delete_report_section_map(
        &self,
        report_id: &str,
        section_id: &str,
        name: &str,
    ) -> Result<String> {
        self.delete_map_by_ids_and_name("reports", report_id, "sections", section_id, name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_position_zero_survives_filtering() {
        let params = ReportSectionQuery {
            position: Some(0),
            ..Default::default()
        }
        .into_params()
        .filtered();
        assert!(
            params
                .iter()
                .any(|(name, value)| *name == "position" && *value == ParamValue::Number(0))
        );
    }

    #[test]
    fn test_unset_position_is_omitted() {
        let params = ReportSectionQuery::default().into_params().filtered();
        assert!(params.iter().all(|(name, _)| *name != "position"));
    }
}
