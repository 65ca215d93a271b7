//! The `gist` binary. All of the CLI lives in `cli/`; this file only runs it
//! and turns a failure into a message, the usage text and a non-zero exit.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_failure(&e);
        std::process::exit(1);
    }
}
