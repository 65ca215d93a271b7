use crate::error::Result;
use crate::program::{find_program, pipe_to};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Something that can put content on the system clipboard.
pub trait ClipboardWriter {
    fn write_contents(&self, contents: &[u8]) -> Result<()>;
}

/// A clipboard tool and the arguments it needs to read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Clipboard tools in order of preference.
/// - macOS: pbcopy
/// - Linux: wl-copy (Wayland), then xclip or xsel (X11)
/// - Cygwin: putclip
/// - Windows: clip.exe
pub const CLIPBOARD_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "pbcopy",
        args: &[],
    },
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
    ClipboardTool {
        program: "putclip",
        args: &[],
    },
    ClipboardTool {
        program: "clip",
        args: &[],
    },
];

/// A clipboard tool found on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedTool {
    pub tool: ClipboardTool,
    pub path: PathBuf,
}

/// Returns the first tool in `tools` for which `locate` finds a program.
pub fn detect_with<F>(tools: &[ClipboardTool], locate: F) -> Option<DetectedTool>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    tools.iter().find_map(|tool| {
        locate(tool.program).map(|path| DetectedTool { tool: *tool, path })
    })
}

static DETECTED: Lazy<Option<DetectedTool>> = Lazy::new(|| {
    let detected = detect_with(CLIPBOARD_TOOLS, find_program);
    match &detected {
        Some(d) => log::debug!("clipboard tool: {}", d.path.display()),
        None => log::debug!("no clipboard tool found"),
    }
    detected
});

/// Copies through the first clipboard tool available on this host.
/// Tool detection happens once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn detected(&self) -> Option<&'static DetectedTool> {
        DETECTED.as_ref()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_contents(&self, contents: &[u8]) -> Result<()> {
        match self.detected() {
            Some(d) => pipe_to(&d.path, d.tool.args, contents),
            None => Ok(()),
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardWriter for NoClipboard {
    fn write_contents(&self, _contents: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Tries to copy `content` to the clipboard and hands it back unchanged.
/// Clipboard failures are logged, never returned.
pub fn copy<'a, C, T>(clipboard: &C, content: &'a T) -> &'a T
where
    C: ClipboardWriter + ?Sized,
    T: AsRef<[u8]> + ?Sized,
{
    if let Err(e) = clipboard.write_contents(content.as_ref()) {
        log::warn!("failed to copy to clipboard: {}", e);
    }
    content
}
