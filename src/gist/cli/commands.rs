//! Wires parsed arguments to the API and prints the outcome.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: builds the `GistApi` from git config and the environment
//! - `handle_*()`: per-mode handlers

use super::manual::MANUAL;
use super::print::{print_content, print_usage};
use super::setup::Cli;
use clap::Parser;
use gist::api::GistApi;
use gist::browser::SystemOpener;
use gist::client::PasteClient;
use gist::clipboard::SystemClipboard;
use gist::config::{GistConfig, GitConfig};
use gist::error::Result;
use gist::input::{resolve_input, Input};
use gist::model::normalize_extension;
use log::LevelFilter;
use std::io::{self, IsTerminal};

type AppApi = GistApi<SystemClipboard, SystemOpener>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        print_usage();
        return Ok(());
    }

    if cli.man {
        print!("{}", MANUAL);
        return Ok(());
    }

    let api = init_context()?;

    match &cli.read {
        Some(id) => handle_read(&api, id),
        None => handle_create(&api, &cli),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or("GIST_LOG", "warn"));
    if verbose {
        builder.filter_module("gist", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn init_context() -> Result<AppApi> {
    let config = GistConfig::load(&GitConfig);
    log::debug!(
        "service {}, private {}, extension {:?}, user {:?}",
        config.base_url,
        config.default_private,
        config.default_extension,
        config.credentials.as_ref().map(|c| c.user.as_str())
    );
    let client = PasteClient::new(config)?;
    Ok(GistApi::new(client, SystemClipboard, SystemOpener))
}

fn handle_create(api: &AppApi, cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let is_terminal = stdin.is_terminal();

    let (content, derived_ext) =
        match resolve_input(cli.file.as_deref(), &mut stdin.lock(), is_terminal)? {
            Input::Help => {
                print_usage();
                return Ok(());
            }
            Input::Content { content, file_ext } => (content, file_ext),
        };

    let file_ext = choose_extension(derived_ext, cli.file_type.as_deref());
    let request = api.request(content, file_ext.as_deref(), cli.private_override());
    let result = api.create(&request)?;

    println!("{}", result.url);
    Ok(())
}

fn handle_read(api: &AppApi, id: &str) -> Result<()> {
    let content = api.fetch(id)?;
    print_content(&content)?;
    Ok(())
}

/// The file's own extension wins over `--type`. A blank `--type` counts as not given.
fn choose_extension(from_file: Option<String>, type_flag: Option<&str>) -> Option<String> {
    from_file.or_else(|| type_flag.and_then(normalize_extension))
}
