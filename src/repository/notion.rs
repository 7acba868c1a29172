//! Profile lookups backed by the Notion database query API.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::domain::profile::ProfileUrl;
use crate::domain::types::{BaseUrl, FilterProperty, PageId, WorkspaceName};
use crate::dto::notion::{DatabaseQuery, DatabaseQueryResponse};
use crate::models::config::NotionSettings;
use crate::repository::ProfileReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const NOTION_VERSION_HEADER: &str = "notion-version";

/// Upstream error bodies are cut to this many bytes before being logged.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Notion client that sends the bearer token and API version with every request.
#[derive(Clone, Debug)]
pub struct NotionRepository {
    client: Client,
    query_url: String,
    site_url: BaseUrl,
    workspace: WorkspaceName,
    filter_property: FilterProperty,
}

impl NotionRepository {
    pub fn new(settings: &NotionSettings) -> RepositoryResult<Self> {
        let mut headers = HeaderMap::new();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", settings.token.expose()))
            .map_err(|e| RepositoryError::Setup(format!("Invalid API key format: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        headers.insert(
            HeaderName::from_static(NOTION_VERSION_HEADER),
            HeaderValue::from_str(&settings.version)
                .map_err(|e| RepositoryError::Setup(format!("Invalid Notion version: {e}")))?,
        );

        let client = Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| RepositoryError::Setup(format!("Failed to build HTTP client: {e}")))?;

        let query_url = settings
            .api_url
            .join(["databases", settings.database_id.as_str(), "query"]);

        log::info!("Notion repository initialized: {query_url}");

        Ok(Self {
            client,
            query_url,
            site_url: settings.site_url.clone(),
            workspace: settings.workspace.clone(),
            filter_property: settings.filter_property.clone(),
        })
    }

    fn profile_url(&self, page_id: String) -> RepositoryResult<ProfileUrl> {
        let page_id = PageId::new(page_id)
            .map_err(|e| RepositoryError::Decode(format!("invalid page id: {e}")))?;
        Ok(ProfileUrl::new(&self.site_url, &self.workspace, &page_id))
    }
}

impl ProfileReader for NotionRepository {
    async fn find_profile_urls(&self, term: &str) -> RepositoryResult<Vec<ProfileUrl>> {
        let query = DatabaseQuery::text_contains(&self.filter_property, term);

        log::debug!("Querying {} for {term:?}", self.query_url);

        let response = self.client.post(&self.query_url).json(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY_LEN {
                let cut = (0..=MAX_ERROR_BODY_LEN)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(RepositoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: DatabaseQueryResponse = response.json().await?;

        log::debug!("Notion returned {} results", payload.results.len());

        payload
            .results
            .into_iter()
            .map(|page| self.profile_url(page.id))
            .collect()
    }
}
