//! # API Facade
//!
//! `GistApi` is the single entry point for creating and reading pastes. It
//! combines the HTTP client with the two desktop side effects (browser and
//! clipboard) and fills in configured defaults.
//!
//! The facade never prints and never exits; it returns `Result`s and leaves
//! presentation to the caller.
//!
//! ## Generic Over Side Effects
//!
//! `GistApi<C: ClipboardWriter, O: UrlOpener>`:
//! - Production: `GistApi<SystemClipboard, SystemOpener>`
//! - Testing: `GistApi<NoClipboard, NoOpener>` or recording fakes
//!
//! Side-effect failures are logged and never abort an operation: the returned
//! URL or content is the source of truth.

use crate::browser::{browse, UrlOpener};
use crate::client::PasteClient;
use crate::clipboard::{copy, ClipboardWriter};
use crate::config::GistConfig;
use crate::error::Result;
use crate::model::{normalize_extension, PasteRequest, PasteResult};

pub struct GistApi<C: ClipboardWriter, O: UrlOpener> {
    client: PasteClient,
    clipboard: C,
    opener: O,
}

impl<C: ClipboardWriter, O: UrlOpener> GistApi<C, O> {
    pub fn new(client: PasteClient, clipboard: C, opener: O) -> Self {
        Self {
            client,
            clipboard,
            opener,
        }
    }

    pub fn config(&self) -> &GistConfig {
        self.client.config()
    }

    /// Builds a request for `content`, using configured defaults for
    /// whatever the caller leaves unset. An empty extension counts as unset.
    pub fn request(
        &self,
        content: impl Into<Vec<u8>>,
        file_ext: Option<&str>,
        is_private: Option<bool>,
    ) -> PasteRequest {
        let config = self.config();
        let file_ext = file_ext
            .and_then(normalize_extension)
            .or_else(|| config.default_extension.clone());
        PasteRequest::new(content)
            .with_extension(file_ext.as_deref())
            .with_private(is_private.unwrap_or(config.default_private))
            .with_credentials(config.credentials.clone())
    }

    /// Creates a paste, opens it in the browser and copies its URL.
    pub fn create(&self, request: &PasteRequest) -> Result<PasteResult> {
        let result = self.client.write(request)?;
        browse(&self.opener, &result.url);
        copy(&self.clipboard, result.url.as_str());
        Ok(result)
    }

    /// Fetches a paste's raw content and copies it to the clipboard.
    pub fn fetch(&self, id: &str) -> Result<Vec<u8>> {
        let content = self.client.read(id)?;
        copy(&self.clipboard, content.as_slice());
        Ok(content)
    }
}
