//! Wire format of the Notion database query endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /databases/{database_id}/query`.
#[derive(Debug, Serialize)]
pub struct DatabaseQuery<'a> {
    pub filter: PropertyFilter<'a>,
}

/// Single-property filter matching rich text content.
#[derive(Debug, Serialize)]
pub struct PropertyFilter<'a> {
    pub property: &'a str,
    pub text: TextCondition<'a>,
}

#[derive(Debug, Serialize)]
pub struct TextCondition<'a> {
    pub contains: &'a str,
}

impl<'a> DatabaseQuery<'a> {
    /// Builds a `contains` text filter on the given property.
    pub fn text_contains(property: &'a str, term: &'a str) -> Self {
        Self {
            filter: PropertyFilter {
                property,
                text: TextCondition { contains: term },
            },
        }
    }
}

/// Response of the query endpoint; only page ids are consumed.
#[derive(Debug, Deserialize)]
pub struct DatabaseQueryResponse {
    pub results: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
pub struct PageRef {
    pub id: String,
}
