//! Section endpoints

use crate::error::Result;
use crate::{CarrotClient, Params};

/// Filters for the section find mapping
#[derive(Debug, Clone, PartialEq)]
pub struct SectionQuery {
    pub section_id: String,
    pub name: String,
    pub description: String,
    pub contents: String,
    pub created_by: String,
    pub created_before: String,
    pub created_after: String,
    pub sort: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for SectionQuery {
    fn default() -> Self {
        Self {
            section_id: String::new(),
            name: String::new(),
            description: String::new(),
            contents: String::new(),
            created_by: String::new(),
            created_before: String::new(),
            created_after: String::new(),
            sort: String::new(),
            limit: 20,
            offset: 0,
        }
    }
}

impl SectionQuery {
    fn into_params(self) -> Params {
        Params::new()
            .text("section_id", self.section_id)
            .text("name", self.name)
            .text("description", self.description)
            .text("contents", self.contents)
            .text("created_by", self.created_by)
            .text("created_before", self.created_before)
            .text("created_after", self.created_after)
            .text("sort", self.sort)
            .number("limit", self.limit)
            .number("offset", self.offset)
    }
}

/// Fields for section creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSection {
    pub name: String,
    pub description: String,
    pub contents: String,
    pub created_by: String,
}

/// Fields for section update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionUpdate {
    pub name: String,
    pub description: String,
    pub contents: String,
}

impl CarrotClient {
    /// Retrieve a section by its ID
    pub async fn find_section_by_id(&self, id: &str) -> Result<String> {
        self.find_by_id("sections", id).await
    }

    /// Retrieve sections matching the supplied filters
    pub async fn find_sections(&self, query: SectionQuery) -> Result<String> {
        self.find("sections", query.into_params()).await
    }

    /// Create a section
    pub async fn create_section(&self, section: NewSection) -> Result<String> {
        let params = Params::new()
            .text("name", section.name)
            .text("description", section.description)
            .text("contents", section.contents)
            .text("created_by", section.created_by);
        self.create("sections", params).await
    }

    /// Update the section with the given ID
    pub async fn update_section(&self, id: &str, update: SectionUpdate) -> Result<String> {
        let params = Params::new()
            .text("name", update.name)
            .text("description", update.description)
            .text("contents", update.contents);
        self.update("sections", id, params).await
    }

    /// Delete the section with the given ID
    pub async fn delete_section(&self, id: &str) -> Result<String> {
        self.delete("sections", id).await
    }
}
