use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use kkredit::core::models::position::Coordinates;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "kkredit - Relabel sites and edit atom-type definitions in KKR-CPA input files without moving atoms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the atomic positions and type definitions of an input file.
    List(ListArgs),
    /// Print the parsed structure of an input file as TOML.
    Inspect(InspectArgs),
    /// Apply edits to an input file and write the result.
    Edit(EditArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the input file (e.g., test.in).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input file (e.g., test.in).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Only include type definitions referenced by a position.
    #[arg(long)]
    pub used_only: bool,
}

/// Arguments for the `edit` subcommand.
#[derive(Args, Debug)]
pub struct EditArgs {
    // --- Core Arguments ---
    /// Path to the template input file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the edited input file. Missing parent directories are created.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an edit recipe in TOML format.
    #[arg(short = 'c', long = "recipe", value_name = "PATH")]
    pub recipe: Option<PathBuf>,

    // --- Extra Steps (applied after the recipe) ---
    /// Relabel every position labelled OLD. Can be used multiple times.
    #[arg(short = 'r', long = "relabel", value_name = "OLD=NEW", value_parser = parser::parse_relabel)]
    pub relabel: Vec<(String, String)>,

    /// Relabel the position at a 0-based index. Can be used multiple times.
    #[arg(long = "set-index", value_name = "INDEX=LABEL", value_parser = parser::parse_index_assignment)]
    pub set_index: Vec<(usize, String)>,

    /// Relabel every position at exactly these coordinates. Can be used multiple times.
    #[arg(long = "set-site", value_name = "X,Y,Z=LABEL", value_parser = parser::parse_site_assignment)]
    pub set_site: Vec<(Coordinates, String)>,
}
