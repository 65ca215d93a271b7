use crate::config::GistConfig;
use crate::error::{GistError, Result};
use crate::model::{PasteRequest, PasteResult};
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Proxy, StatusCode};

/// Talks to the gist service: one POST to create, one GET to read.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: Client,
    config: GistConfig,
}

impl PasteClient {
    /// Builds a client honoring the configured proxy and timeout. Redirects are
    /// never followed since the creation response's `Location` is the result.
    pub fn new(config: GistConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .redirect(Policy::none())
            .timeout(config.timeout)
            .no_proxy();
        if let Some(proxy) = &config.proxy {
            log::debug!("using proxy {}", proxy.url());
            builder = builder.proxy(Proxy::all(proxy.url())?);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GistConfig {
        &self.config
    }

    /// Submits `request` and returns the URL of the new paste.
    pub fn write(&self, request: &PasteRequest) -> Result<PasteResult> {
        let url = self.config.create_url();
        log::debug!(
            "POST {} ({} bytes, ext {}, private {})",
            url,
            request.content.len(),
            request.wire_extension(),
            request.is_private
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.form_body())
            .send()?;
        let status = response.status();

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(GistError::UnexpectedResponse(status.as_u16()))?;

        log::debug!("created {} (HTTP {})", location, status.as_u16());
        Ok(PasteResult { url: location })
    }

    /// Returns the raw body of paste `id`, byte for byte.
    pub fn read(&self, id: &str) -> Result<Vec<u8>> {
        let url = self.config.read_url(id);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send()?;
        match response.status() {
            status if status.is_success() => Ok(response.bytes()?.to_vec()),
            StatusCode::NOT_FOUND => Err(GistError::NotFound(id.to_string())),
            status => Err(GistError::UnexpectedResponse(status.as_u16())),
        }
    }
}
