// HttpClientFactory: builds the `reqwest::Client` used for all API calls.

use anyhow::{Context, Result};
use annotations_sdk::ReporterPackage;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::constants::api;

/// Creates HTTP clients preconfigured for the REST API.
pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Create a new `reqwest::Client` that sends the bearer token, the JSON
    /// media type, the API version header and the product user agent on every
    /// request.
    ///
    /// Proxy settings are taken from `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY`
    /// by reqwest itself. No timeout is set.
    pub fn create_client(token: &str) -> Result<Client> {
        let client = Client::builder()
            .default_headers(Self::default_headers(token)?)
            .user_agent(ReporterPackage::user_agent())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(client)
    }

    fn default_headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("Access token contains characters not allowed in a header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(ACCEPT, HeaderValue::from_static(api::MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(api::VERSION_HEADER),
            HeaderValue::from_static(api::VERSION),
        );
        Ok(headers)
    }
}
