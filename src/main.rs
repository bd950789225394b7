use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use linkpeek::cache::ForeignLinkCache;
use linkpeek::config::SiteConfig;
use linkpeek::diagnostics;
use linkpeek::error::Error;
use linkpeek::types::{ElementId, LinkElement};

/// Site config file consulted by every subcommand, in the working directory.
const CONFIG_FILE: &str = "linkpeek.toml";

#[derive(Parser)]
#[command(name = "linkpeek", about = "Link target resolution for hover page previews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a link against the site config and print the target as JSON
    Resolve {
        /// Absolute URL the link points to
        href: String,
        /// Value of the element's title attribute
        #[arg(long, default_value = "")]
        title_attr: String,
        /// Class name present on the element (repeatable)
        #[arg(long = "class")]
        classes: Vec<String>,
    },
    /// Inspect or edit the interwiki prefix table
    Interwiki {
        #[command(subcommand)]
        command: InterwikiCommands,
    },
}

#[derive(Subcommand)]
enum InterwikiCommands {
    /// Add or replace a prefix mapping
    Add {
        /// Interwiki prefix (text before the colon in link titles)
        prefix: String,
        /// Foreign API base URL the prefix maps to
        api_url: String,
    },
    /// Print configured prefixes and their API URLs, sorted
    List,
    /// Remove a prefix mapping
    Remove {
        /// Interwiki prefix to remove
        prefix: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { href, title_attr, classes } => {
            cmd_resolve(&href, &title_attr, classes)
        },
        Commands::Interwiki { command } => match command {
            InterwikiCommands::Add { prefix, api_url } => cmd_interwiki_add(&prefix, &api_url),
            InterwikiCommands::List => cmd_interwiki_list(),
            InterwikiCommands::Remove { prefix } => cmd_interwiki_remove(&prefix),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    }
}

// ── Resolution ────────────────────────────────────────────────────────

/// Resolve one link and print the result.
/// Exit code 0 means previewable, 1 means not previewable.
///
/// # Errors
///
/// Returns errors from config loading. An unparseable href is "not
/// previewable", not an error.
fn cmd_resolve(href: &str, title_attr: &str, classes: Vec<String>) -> Result<ExitCode, Error> {
    let config = SiteConfig::load(&PathBuf::from(CONFIG_FILE))?;
    let cache = ForeignLinkCache::new();

    let target = LinkElement::from_absolute_href(ElementId(0), href, title_attr, classes)
        .and_then(|element| linkpeek::resolve(&element, &config, &cache));

    match target {
        Some(target) => {
            let json = serde_json::to_string_pretty(&target).unwrap_or_default();
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        },
        None => {
            println!("not previewable");
            Ok(ExitCode::from(1))
        },
    }
}

// ── Interwiki table editing ───────────────────────────────────────────

/// List configured interwiki prefixes, sorted alphabetically.
///
/// # Errors
///
/// Returns errors from config loading.
fn cmd_interwiki_list() -> Result<ExitCode, Error> {
    let config = SiteConfig::load(&PathBuf::from(CONFIG_FILE))?;

    if config.interwiki.is_empty() {
        println!("No interwiki prefixes configured.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut sorted: Vec<_> = config.interwiki.iter().collect();
    sorted.sort_by_key(|(prefix, _)| prefix.as_str());
    for (prefix, api_url) in sorted {
        println!("{prefix} -> {api_url}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Add a prefix mapping to the config file, creating the `[interwiki]`
/// table if it doesn't exist. Replaces an existing mapping for the prefix.
///
/// # Errors
///
/// Returns errors from config reading or writing.
fn cmd_interwiki_add(prefix: &str, api_url: &str) -> Result<ExitCode, Error> {
    let (path, mut doc) = read_config_doc()?;

    if !doc.contains_key("interwiki") {
        doc["interwiki"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["interwiki"][prefix] = toml_edit::value(api_url);

    std::fs::write(&path, doc.to_string())?;
    println!("Added interwiki prefix: {prefix} -> {api_url}");
    Ok(ExitCode::SUCCESS)
}

/// Remove a prefix mapping from the config file.
///
/// # Errors
///
/// Returns `Error::UnknownPrefix` if the prefix isn't configured,
/// or errors from config reading or writing.
fn cmd_interwiki_remove(prefix: &str) -> Result<ExitCode, Error> {
    let (path, mut doc) = read_config_doc()?;

    let removed = doc
        .get_mut("interwiki")
        .and_then(toml_edit::Item::as_table_mut)
        .and_then(|table| table.remove(prefix));
    if removed.is_none() {
        return Err(Error::UnknownPrefix {
            prefix: prefix.to_string(),
        });
    }

    std::fs::write(&path, doc.to_string())?;
    println!("Removed interwiki prefix: {prefix}");
    Ok(ExitCode::SUCCESS)
}

/// Parse the config file into a format-preserving document for editing.
///
/// # Errors
///
/// Returns `Error::ConfigNotFound` if the file doesn't exist,
/// `Error::Io` on other read failures,
/// or `Error::ConfigMalformed` on parse failure.
fn read_config_doc() -> Result<(PathBuf, toml_edit::DocumentMut), Error> {
    let path = PathBuf::from(CONFIG_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound { path });
        },
        Err(e) => return Err(Error::Io(e)),
    };

    let doc: toml_edit::DocumentMut =
        content.parse().map_err(|e: toml_edit::TomlError| Error::ConfigMalformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok((path, doc))
}
