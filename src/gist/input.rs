use crate::error::{GistError, Result};
use crate::model::normalize_extension;
use std::fs;
use std::io::Read;
use std::path::Path;

/// What the invocation asked us to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing to read: interactive terminal and no file argument.
    Help,
    /// Content to paste, with the extension hint derived from the file name.
    Content {
        content: Vec<u8>,
        file_ext: Option<String>,
    },
}

/// Decides where the paste content comes from.
///
/// A named file always wins and must exist. Without one, an interactive
/// `stdin` means there is nothing to read, otherwise `stdin` is drained.
pub fn resolve_input<R: Read>(
    file: Option<&Path>,
    stdin: &mut R,
    stdin_is_terminal: bool,
) -> Result<Input> {
    if let Some(path) = file {
        if !path.is_file() {
            return Err(GistError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read(path)?;
        let file_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(normalize_extension);
        return Ok(Input::Content { content, file_ext });
    }

    if stdin_is_terminal {
        return Ok(Input::Help);
    }

    let mut content = Vec::new();
    stdin.read_to_end(&mut content)?;
    Ok(Input::Content {
        content,
        file_ext: None,
    })
}
