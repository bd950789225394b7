use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and how to fix it.
/// Designed to be readable by both humans and LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::ConfigMalformed { path, reason } => format!(
            "\
# Error: Config Malformed

Could not parse `{}`: {reason}
",
            path.display()
        ),

        Error::ConfigNotFound { path } => format!(
            "\
# Error: Config Not Found

`{}` does not exist.

## Fix

Create a `linkpeek.toml` describing the site: article path template,
content namespaces, and the current page identity.
",
            path.display()
        ),

        Error::InvalidArticlePath { template } => format!(
            "\
# Error: Invalid Article Path Template

`{template}` must contain exactly one `$1` placeholder marking where the
page title appears.

## Fix

    article_path = \"/wiki/$1\"
"
        ),

        Error::Io(e) => format!(
            "\
# Error: I/O

{e}
"
        ),

        Error::TomlDe(e) => format!(
            "\
# Error: Invalid TOML

{e}
"
        ),

        Error::UnknownPrefix { prefix } => format!(
            "\
# Error: Unknown Interwiki Prefix

Prefix `{prefix}` is not configured.

## Fix

Add it to `linkpeek.toml`:

    [interwiki]
    {prefix} = \"https://example.org/w/api.php\"

Or run:

    linkpeek interwiki add {prefix} https://example.org/w/api.php
"
        ),
    }
}
