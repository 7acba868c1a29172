//! Domain model for profile pages found in the Notion database.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::types::{BaseUrl, PageId, WorkspaceName};

/// Public link to a profile page: `<site>/<workspace>/<page id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    #[must_use]
    pub fn new(site_url: &BaseUrl, workspace: &WorkspaceName, page_id: &PageId) -> Self {
        Self(site_url.join([workspace.as_str(), page_id.as_str()]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProfileUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
