//! Software-version endpoints
//!
//! Version records are created server-side when CARROT notices new commits,
//! so the client only searches them.

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the software-version find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareVersionQuery {
    pub software_version_id: String,
    pub software_id: String,
    pub commit: String,
    pub software_name: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for SoftwareVersionQuery {
    fn default() -> Self {
        Self {
            software_version_id: String::new(),
            software_id: String::new(),
            commit: String::new(),
            software_name: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl SoftwareVersionQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("software_version_id", self.software_version_id)
            .text("software_id", self.software_id)
            .text("commit", self.commit)
            .text("software_name", self.software_name)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

impl CarrotClient {
    /// Retrieve a software version record by its ID
    pub async fn find_software_version_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("software_versions", id).await
    }

    /// Retrieve software version records matching the supplied filters
    pub async fn find_software_versions(&self, query: SoftwareVersionQuery) -> Result<String> {
        self.find("software_versions", query.into_params()).await
    }
}
