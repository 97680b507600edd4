use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};

pub const USER_AGENT: &str = "Mozilla/5.0";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 30;

/// Builds a fresh client for a single fetch; nothing is pooled across requests.
pub fn build_client() -> Result<Client, FetchError> {
    ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// Issues exactly one GET for `url`. Any status code counts as fetched.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;
    let client = build_client()?;

    let response = client
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    let body_bytes = response
        .bytes()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    debug!(
        url_final = %final_url,
        status = status.as_u16(),
        size = body_bytes.len(),
        "fetched page"
    );

    Ok(process_response(final_url, status, &headers, body_bytes))
}
