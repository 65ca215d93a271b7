//! # Gist Architecture
//!
//! `gist` posts text to gist.github.com and hands back the new URL. The crate is a
//! small library with a CLI client on top: the binary (`main.rs` + `cli/`) owns
//! argument parsing, terminal output and exit codes, everything here owns the rest.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints URLs, usage and errors          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Fills in configured defaults                             │
//! │  - create: POST → browse → copy URL                         │
//! │  - fetch:  GET → copy content                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (input.rs, client.rs, model.rs)                       │
//! │  - Resolves file/stdin input                                │
//! │  - Builds the form payload, talks HTTP                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Platform (clipboard.rs, browser.rs, program.rs)            │
//! │  - ClipboardWriter / UrlOpener traits                       │
//! │  - System implementations shell out to helper programs      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//!
//! Preferences (`gist.private`, `gist.extension`) and credentials (`github.user`,
//! `github.token`) are read from `git config` once at startup into a [`config::GistConfig`],
//! together with `HTTP_PROXY` and `GIST_URL`. Nothing below the CLI reads the
//! environment on its own; the config object is passed in explicitly.
//!
//! ## Module Overview
//!
//! - [`api`]: The `GistApi` facade
//! - [`client`]: `PasteClient`, the HTTP writer/reader
//! - [`input`]: File/stdin input resolution
//! - [`model`]: `PasteRequest`, `PasteResult`, `Credentials`
//! - [`config`]: Configuration sources and `GistConfig`
//! - [`clipboard`]: Clipboard capability and tool detection
//! - [`browser`]: URL opener capability
//! - [`program`]: Locating and running helper programs
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod program;
