use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gist",
    bin_name = "gist",
    version,
    disable_help_flag = true,
    override_usage = "gist [OPTIONS] [FILE]"
)]
#[command(about = "Post a file or stdin to gist.github.com", long_about = None)]
pub struct Cli {
    /// File to post (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Make the gist private
    #[arg(short, long, overrides_with = "no_private")]
    pub private: bool,

    /// Make the gist public, even when gist.private is set
    #[arg(long = "no-private", overrides_with = "private")]
    pub no_private: bool,

    /// Set syntax highlighting of the gist by file extension
    #[arg(short = 't', long = "type", value_name = "EXTENSION")]
    pub file_type: Option<String>,

    /// Print the raw content of an existing gist
    #[arg(
        short,
        long,
        value_name = "ID",
        conflicts_with_all = ["file", "private", "no_private", "file_type"]
    )]
    pub read: Option<String>,

    /// Print manual
    #[arg(short, long)]
    pub man: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Display this screen
    #[arg(short, long)]
    pub help: bool,
}

impl Cli {
    /// The private flag as given on the command line, `None` when neither
    /// `--private` nor `--no-private` was passed.
    pub fn private_override(&self) -> Option<bool> {
        if self.private {
            Some(true)
        } else if self.no_private {
            Some(false)
        } else {
            None
        }
    }
}

/// The help screen, also shown after every failure.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
