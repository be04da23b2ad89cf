//! Command line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `heroicon` command
#[must_use]
pub fn cli() -> Command {
    Command::new("heroicon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heroicon Plus maintenance tool")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file (defaults apply when omitted)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("publish")
                .about("Publish icon assets and generate icon index JSON files")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite published files"),
                ),
        )
        .subcommand(
            Command::new("serve").about("Serve the custom icon, search and resolve endpoints"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print the public URL for a stored value (exit 1 if no icon is selected)")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("Stored value, e.g. outline:academic-cap"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("List icons of a style, optionally filtered")
                .arg(
                    Arg::new("style")
                        .required(true)
                        .help("outline, solid, mini, micro or custom"),
                )
                .arg(
                    Arg::new("query")
                        .default_value("")
                        .help("Case-insensitive substring filter"),
                ),
        )
}
