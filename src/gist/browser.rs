use crate::error::Result;
use crate::program::{find_program, run};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Something that can show a URL to the user.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

static OPENER_PATH: Lazy<Option<PathBuf>> = Lazy::new(|| find_program(OPENER.0));

/// Opens URLs with the platform's default handler:
/// `open` on macOS, `start` on Windows, `xdg-open` elsewhere.
/// Does nothing when the handler is not installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let Some(path) = OPENER_PATH.as_ref() else {
            log::debug!("{} not found, not opening {}", OPENER.0, url);
            return Ok(());
        };
        let mut args = OPENER.1.to_vec();
        args.push(url);
        run(path, &args)
    }
}

/// Never opens anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpener;

impl UrlOpener for NoOpener {
    fn open(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

/// Opens `url`, logging instead of failing when that is not possible.
pub fn browse<O: UrlOpener + ?Sized>(opener: &O, url: &str) {
    if let Err(e) = opener.open(url) {
        log::warn!("failed to open {} in a browser: {}", url, e);
    }
}
