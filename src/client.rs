use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

use crate::data_models::{
    Appeal, AppealSearchParams, Decision, DecisionSearchParams, PageRequest, Paginated,
};
use crate::parser;
use crate::query;

pub const DEFAULT_BASE_URL: &str = "https://www.ansc.md";

/// The only fatal failure class: the portal could not be fetched. Malformed
/// rows, unknown status labels, and missing pager markup are all handled
/// in-band by the parser.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search against the portal failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Everything the client needs up front. No process-wide defaults are read
/// after construction; one config value fully determines one client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Headers sent on every request. The defaults imitate a desktop
    /// browser; the portal serves its full markup only to browser-looking
    /// user agents.
    pub headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            ),
        );
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        }
    }
}

/// Client for the portal's rendered listing pages.
///
/// Owns its HTTP connection pool; construct one per configuration and share
/// it by reference. Calls are independent: each fetches its own document,
/// parses it once, and assembles its own response. No state is held across
/// calls.
#[derive(Debug, Clone)]
pub struct AnscClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnscClient {
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .default_headers(config.headers)
            .build()?;
        Ok(AnscClient {
            http,
            base_url: config.base_url,
        })
    }

    /// Search appeals for one year, one page.
    pub async fn search_appeals(
        &self,
        params: &AppealSearchParams,
        page: &PageRequest,
    ) -> Result<Paginated<Appeal>, SearchError> {
        let year = query::resolve_year(params.year);
        let html = self
            .fetch(
                &query::appeals_path(year),
                &query::encode_appeal_query(params, page),
            )
            .await?;
        Ok(parser::parse_appeals_page(&html, page.requested_page()))
    }

    /// Search decisions for one year, one page.
    pub async fn search_decisions(
        &self,
        params: &DecisionSearchParams,
        page: &PageRequest,
    ) -> Result<Paginated<Decision>, SearchError> {
        let year = query::resolve_year(params.year);
        let html = self
            .fetch(
                &query::decisions_path(year),
                &query::encode_decision_query(params, page),
            )
            .await?;
        Ok(parser::parse_decisions_page(&html, page.requested_page()))
    }

    async fn fetch(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<String, SearchError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url} with {} query params", query.len());
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
