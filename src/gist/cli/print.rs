use super::setup::usage;
use colored::Colorize;
use gist::error::GistError;
use std::io::{self, Write};

pub fn print_usage() {
    print!("{}", usage());
}

/// Reports a failed run: one line on stderr, then the usage text.
pub fn print_failure(error: &GistError) {
    eprintln!("{}", error.to_string().red());
    print_usage();
}

/// Writes paste content to stdout byte for byte.
pub fn print_content(content: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content)?;
    stdout.flush()
}
