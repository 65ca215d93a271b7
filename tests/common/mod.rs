use gist::browser::UrlOpener;
use gist::clipboard::ClipboardWriter;
use gist::config::{GistConfig, MapSource};
use gist::error::Result;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Config pointing at `server`, with git config values from `source`.
#[allow(unused)]
pub fn config_for(server: &MockServer, source: MapSource) -> GistConfig {
    GistConfig::from_parts(&source, None, Some(&server.uri()))
}

/// Runs blocking client code off the async test runtime.
#[allow(unused)]
pub async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

/// Mounts a creation endpoint that redirects to `<server>/<id>`.
#[allow(unused)]
pub async fn mount_create(server: &MockServer, id: &str) -> String {
    let location = format!("{}/{}", server.uri(), id);
    Mock::given(method("POST"))
        .and(path("/gists"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.as_str()))
        .mount(server)
        .await;
    location
}

/// Decodes a form-encoded request body into ordered key/value pairs,
/// keeping values as raw bytes.
#[allow(unused)]
pub fn form_of(request: &Request) -> Vec<(String, Vec<u8>)> {
    request
        .body
        .split(|b| *b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, |b| *b == b'=');
            let name = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            let name = urlencoding::decode_binary(name);
            (
                String::from_utf8(name.into_owned()).unwrap(),
                urlencoding::decode_binary(value).into_owned(),
            )
        })
        .collect()
}

#[allow(unused)]
pub fn raw_field<'a>(form: &'a [(String, Vec<u8>)], name: &str) -> Option<&'a [u8]> {
    form.iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_slice())
}

#[allow(unused)]
pub fn field<'a>(form: &'a [(String, Vec<u8>)], name: &str) -> Option<&'a str> {
    raw_field(form, name).map(|v| std::str::from_utf8(v).unwrap())
}

/// Records everything written to it.
#[allow(unused)]
#[derive(Clone, Default)]
pub struct RecordingClipboard(pub Arc<Mutex<Vec<Vec<u8>>>>);

impl ClipboardWriter for RecordingClipboard {
    fn write_contents(&self, contents: &[u8]) -> Result<()> {
        self.0.lock().unwrap().push(contents.to_vec());
        Ok(())
    }
}

/// Records every URL it is asked to open.
#[allow(unused)]
#[derive(Clone, Default)]
pub struct RecordingOpener(pub Arc<Mutex<Vec<String>>>);

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
