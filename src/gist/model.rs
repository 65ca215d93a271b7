use urlencoding::{encode, encode_binary};

const DEFAULT_FILE_EXT: &str = ".txt";

const FIELD_EXT: &str = "file_ext[gistfile1]";
const FIELD_NAME: &str = "file_name[gistfile1]";
const FIELD_CONTENTS: &str = "file_contents[gistfile1]";
const FIELD_PRIVATE: &str = "action_button";
const FIELD_LOGIN: &str = "login";
const FIELD_TOKEN: &str = "token";

/// Stored GitHub credentials, attached to a submission when a user is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub token: String,
}

impl Credentials {
    /// Returns credentials only when `user` is non-empty. The token may be empty.
    pub fn from_parts(user: impl Into<String>, token: impl Into<String>) -> Option<Self> {
        let user = user.into().trim().to_string();
        if user.is_empty() {
            return None;
        }
        Some(Self {
            user,
            token: token.into().trim().to_string(),
        })
    }
}

/// A single paste submission. Content is kept as raw bytes and sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub content: Vec<u8>,
    pub file_ext: Option<String>,
    pub is_private: bool,
    pub credentials: Option<Credentials>,
}

impl PasteRequest {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            file_ext: None,
            is_private: false,
            credentials: None,
        }
    }

    pub fn with_extension(mut self, ext: Option<&str>) -> Self {
        self.file_ext = ext.and_then(normalize_extension);
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// The extension sent on the wire, `.txt` when none was given.
    pub fn wire_extension(&self) -> &str {
        self.file_ext.as_deref().unwrap_or(DEFAULT_FILE_EXT)
    }

    /// The fields posted to the creation endpoint, in order.
    pub fn form_fields(&self) -> Vec<(&'static str, &[u8])> {
        let mut fields = vec![
            (FIELD_EXT, self.wire_extension().as_bytes()),
            (FIELD_NAME, &b""[..]),
            (FIELD_CONTENTS, self.content.as_slice()),
        ];

        if self.is_private {
            fields.push((FIELD_PRIVATE, &b"private"[..]));
        }

        if let Some(creds) = &self.credentials {
            fields.push((FIELD_LOGIN, creds.user.as_bytes()));
            fields.push((FIELD_TOKEN, creds.token.as_bytes()));
        }

        fields
    }

    /// The `application/x-www-form-urlencoded` body. Values are
    /// percent-encoded byte by byte, so non-UTF-8 content survives.
    pub fn form_body(&self) -> String {
        self.form_fields()
            .into_iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode_binary(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// The outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteResult {
    pub url: String,
}

/// Normalizes an extension hint to start with a dot. Empty hints become `None`.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{}", ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &[(&'static str, &'a [u8])], name: &str) -> Option<&'a [u8]> {
        fields.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("rb"), Some(".rb".to_string()));
        assert_eq!(normalize_extension(".rb"), Some(".rb".to_string()));
        assert_eq!(normalize_extension("  md "), Some(".md".to_string()));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_default_extension_is_txt() {
        let req = PasteRequest::new("hello");
        assert_eq!(field(&req.form_fields(), FIELD_EXT), Some(&b".txt"[..]));
    }

    #[test]
    fn test_extension_without_dot_gets_one() {
        let req = PasteRequest::new("puts 1").with_extension(Some("rb"));
        assert_eq!(field(&req.form_fields(), FIELD_EXT), Some(&b".rb"[..]));
    }

    #[test]
    fn test_content_is_sent_verbatim() {
        let content = "line one\n  line two\t&=?%\n\u{1F600}";
        let req = PasteRequest::new(content);
        assert_eq!(
            field(&req.form_fields(), FIELD_CONTENTS),
            Some(content.as_bytes())
        );
        assert_eq!(field(&req.form_fields(), FIELD_NAME), Some(&b""[..]));
    }

    #[test]
    fn test_non_utf8_content_is_kept() {
        let content = vec![b'a', 0xff, 0xfe, b'b'];
        let req = PasteRequest::new(content.clone());
        assert_eq!(
            field(&req.form_fields(), FIELD_CONTENTS),
            Some(content.as_slice())
        );
        assert!(req
            .form_body()
            .contains("file_contents%5Bgistfile1%5D=a%FF%FEb"));
    }

    #[test]
    fn test_form_body_encoding() {
        let req = PasteRequest::new("a b+c&d=e").with_extension(Some("rb"));
        assert_eq!(
            req.form_body(),
            "file_ext%5Bgistfile1%5D=.rb&file_name%5Bgistfile1%5D=\
             &file_contents%5Bgistfile1%5D=a%20b%2Bc%26d%3De"
        );
    }

    #[test]
    fn test_private_marker_only_when_private() {
        let public = PasteRequest::new("x").with_private(false);
        assert_eq!(field(&public.form_fields(), FIELD_PRIVATE), None);

        let private = PasteRequest::new("x").with_private(true);
        assert_eq!(
            field(&private.form_fields(), FIELD_PRIVATE),
            Some(&b"private"[..])
        );
    }

    #[test]
    fn test_credentials_omitted_for_empty_user() {
        assert_eq!(Credentials::from_parts("", "secret"), None);
        assert_eq!(Credentials::from_parts("   ", "secret"), None);

        let req = PasteRequest::new("x").with_credentials(Credentials::from_parts("", "secret"));
        let fields = req.form_fields();
        assert_eq!(field(&fields, FIELD_LOGIN), None);
        assert_eq!(field(&fields, FIELD_TOKEN), None);
    }

    #[test]
    fn test_credentials_included_even_with_empty_token() {
        let req = PasteRequest::new("x").with_credentials(Credentials::from_parts("octocat", ""));
        let fields = req.form_fields();
        assert_eq!(field(&fields, FIELD_LOGIN), Some(&b"octocat"[..]));
        assert_eq!(field(&fields, FIELD_TOKEN), Some(&b""[..]));
    }
}
