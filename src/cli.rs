//! Command-line interface implementation for robogen.
//! Every flag defaults to the stock ROBODoc setup, so running a subcommand
//! without flags behaves like the original release and test scripts.

use crate::constants::*;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for robogen.
#[derive(Parser, Debug)]
#[command(author, version, about = "robogen: ROBODoc fixture generator and release patcher", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a randomized tree of C sources with ROBODoc headers
    Fixtures {
        /// Directory the tree root is created in
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Interior levels below the root directory
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        /// Children per level, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FANOUT.to_vec())]
        fanout: Vec<usize>,

        /// Seed for a reproducible tree
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that every generated source starts with a valid header
    Verify {
        /// Directory to scan
        #[arg(value_name = "DIR", default_value = DEFAULT_ROOT_NAME)]
        dir: PathBuf,
    },

    /// Rewrite version numbers and dates in the release files
    Bump {
        /// Project root the release files are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// New version, D.DD.DD
        #[arg(long = "new-version", default_value = DEFAULT_VERSION)]
        new_version: String,

        /// Month abbreviation, e.g. Feb
        #[arg(long, default_value = DEFAULT_MONTH)]
        month: String,

        /// Four digit year
        #[arg(long, default_value = DEFAULT_YEAR)]
        year: String,

        /// Warn instead of failing when a rule matches nothing
        #[arg(long)]
        allow_unmatched: bool,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
