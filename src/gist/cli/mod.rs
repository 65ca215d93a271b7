//! # CLI Behavior
//!
//! ```text
//! gist [OPTIONS] [FILE]
//! ```
//!
//! ### Creating a gist
//!
//! Content comes from, in order:
//!
//! 1. **A file argument**: `gist notes.md`. The file must exist. Its extension
//!    becomes the syntax hint unless `--type` is given.
//! 2. **Piped input**: `echo hi | gist`.
//! 3. **Nothing**: run interactively with no file, `gist` prints its usage and exits 0.
//!
//! On success the URL is opened in the browser, copied to the clipboard and
//! printed. Browser and clipboard are best effort.
//!
//! ### Reading a gist
//!
//! `gist --read ID` prints the raw content of gist `ID` and copies it to the clipboard.
//!
//! ### Failures
//!
//! Any error prints a single line on stderr followed by the usage text, and the
//! process exits with status 1.

mod commands;
mod manual;
mod print;
mod setup;

pub use commands::run;
pub use print::print_failure;
