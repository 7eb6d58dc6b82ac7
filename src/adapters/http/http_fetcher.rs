use std::time::Duration;

use async_trait::async_trait;

use crate::core::errors::{AdminLogError, FetchError, Result};
use crate::core::models::api_envelope::ApiEnvelope;
use crate::core::models::filter::QueryMode;
use crate::core::models::page::{FetchRequest, Page};
use crate::core::traits::fetcher::PageFetcher;

/// Paginated audit-log endpoint, relative to the server base URL.
const ADMIN_LOG_PATH: &str = "/api/log/admin/";

/// Unpaginated full-text search endpoint.
const SEARCH_PATH: &str = "/api/log/search";

/// Fetches audit-log pages from the gateway's REST API.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpPageFetcher {
    /// Build a fetcher for `base_url` with the given request timeout.
    pub fn new(base_url: &str, access_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("adminlog/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdminLogError::InvalidArgument {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    fn url_for(&self, query: &QueryMode) -> String {
        let path = match query {
            QueryMode::Structured(_) => ADMIN_LOG_PATH,
            QueryMode::FullText(_) => SEARCH_PATH,
        };
        format!("{}{path}", self.base_url)
    }
}

/// Query-string parameters for `request`.
pub fn query_params(request: &FetchRequest) -> Vec<(&'static str, String)> {
    match &request.query {
        QueryMode::Structured(filter) => {
            let mut params = vec![
                ("p", request.page_index.to_string()),
                ("page_size", request.page_size.to_string()),
                ("type", filter.action.code().to_string()),
                ("start_timestamp", filter.start_time.to_string()),
                ("end_timestamp", filter.end_time.to_string()),
            ];
            if let Some(actor) = &filter.actor {
                params.push(("username", actor.clone()));
            }
            params
        }
        QueryMode::FullText(keyword) => vec![("keyword", keyword.clone())],
    }
}

#[async_trait(?Send)]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, request: &FetchRequest) -> std::result::Result<Page, FetchError> {
        let url = self.url_for(&request.query);
        tracing::debug!(%url, epoch = %request.epoch, page = request.page_number(), "fetching");

        let mut builder = self.client.get(&url).query(&query_params(request));
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let resp = builder.send().await.map_err(|e| FetchError::Network {
            reason: format!("request to {url} failed: {e}"),
        })?;

        if !resp.status().is_success() {
            return Err(FetchError::Network {
                reason: format!("{url} returned status {}", resp.status()),
            });
        }

        let envelope: ApiEnvelope = resp.json().await.map_err(|e| FetchError::Network {
            reason: format!("failed to parse response from {url}: {e}"),
        })?;

        let rows = envelope
            .into_result()
            .map_err(|message| FetchError::Rejected { message })?;

        Ok(match request.query {
            QueryMode::Structured(_) => Page::for_request(request, rows),
            // search is unpaginated: the whole result set is one final page
            QueryMode::FullText(_) => Page {
                epoch: request.epoch,
                offset: 0,
                entries: rows,
                is_short: true,
            },
        })
    }
}
