use crate::error::{GistError, Result};
use crate::model::{normalize_extension, Credentials};
use reqwest::Url;
use std::collections::HashMap;
use std::process::Command;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gist.github.com";

const KEY_PRIVATE: &str = "gist.private";
const KEY_EXTENSION: &str = "gist.extension";
const KEY_USER: &str = "github.user";
const KEY_TOKEN: &str = "github.token";

const ENV_PROXY: &str = "HTTP_PROXY";
const ENV_BASE_URL: &str = "GIST_URL";

/// Where a config key is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Repository config layered over the user's global config.
    Effective,
    /// The user's global config only.
    Global,
}

/// A read-only key/value store holding user preferences.
pub trait ConfigSource {
    /// Returns the trimmed value for `key`, or `None` when unset or empty.
    fn get(&self, key: &str, scope: ConfigScope) -> Option<String>;
}

/// Reads keys through `git config`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitConfig;

impl ConfigSource for GitConfig {
    fn get(&self, key: &str, scope: ConfigScope) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.arg("config");
        if scope == ConfigScope::Global {
            cmd.arg("--global");
        }
        cmd.arg(key);

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                log::debug!("git config {} unavailable: {}", key, e);
                return None;
            }
        };

        // git exits 1 for unset keys
        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!value.is_empty()).then_some(value)
    }
}

/// In-memory config, mostly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str, _scope: ConfigScope) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Outbound HTTP proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Parses an `HTTP_PROXY`-style value such as `http://proxy:3128` or `proxy:3128`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let url = if raw.contains("://") {
            Url::parse(raw).ok()
        } else {
            Url::parse(&format!("http://{}", raw)).ok()
        }
        .ok_or_else(|| GistError::MalformedConfig(format!("invalid proxy: {}", raw)))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| GistError::MalformedConfig(format!("proxy has no host: {}", raw)))?;
        let port = url.port_or_known_default().unwrap_or(80);

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

/// Process-wide settings, built once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistConfig {
    pub default_private: bool,
    pub default_extension: Option<String>,
    pub proxy: Option<ProxyConfig>,
    pub credentials: Option<Credentials>,
    pub base_url: String,
    /// Per-request timeout. `None` waits for as long as the service takes.
    pub timeout: Option<Duration>,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            default_private: false,
            default_extension: None,
            proxy: None,
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl GistConfig {
    /// Loads settings from `source` and the process environment.
    pub fn load(source: &impl ConfigSource) -> Self {
        Self::from_parts(
            source,
            std::env::var(ENV_PROXY).ok().as_deref(),
            std::env::var(ENV_BASE_URL).ok().as_deref(),
        )
    }

    /// Builds settings from `source` and explicit environment values.
    /// Unusable values are logged and replaced by defaults.
    pub fn from_parts(
        source: &impl ConfigSource,
        http_proxy: Option<&str>,
        base_url: Option<&str>,
    ) -> Self {
        let default_private = source
            .get(KEY_PRIVATE, ConfigScope::Effective)
            .map(|v| str_to_bool(&v))
            .unwrap_or(false);

        let default_extension = source
            .get(KEY_EXTENSION, ConfigScope::Effective)
            .and_then(|v| normalize_extension(&v));

        let credentials = source.get(KEY_USER, ConfigScope::Global).and_then(|user| {
            let token = source
                .get(KEY_TOKEN, ConfigScope::Global)
                .unwrap_or_default();
            Credentials::from_parts(user, token)
        });

        let proxy = http_proxy
            .filter(|v| !v.trim().is_empty())
            .and_then(|raw| match ProxyConfig::parse(raw) {
                Ok(proxy) => Some(proxy),
                Err(e) => {
                    log::warn!("ignoring {}: {}", ENV_PROXY, e);
                    None
                }
            });

        let base_url = base_url
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            default_private,
            default_extension,
            proxy,
            credentials,
            base_url,
            timeout: None,
        }
    }

    pub fn create_url(&self) -> String {
        format!("{}/gists", self.base_url)
    }

    pub fn read_url(&self, id: &str) -> String {
        format!("{}/{}.txt", self.base_url, id)
    }
}

/// Interprets a config string as a boolean: `false`, `0`, `nil` and empty are false.
pub fn str_to_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "nil" | ""
    )
}
