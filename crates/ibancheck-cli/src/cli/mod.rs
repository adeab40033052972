//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default for `--max-file-size`: 16 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits aligned, optionally colored text. `Json` emits one JSON
/// object per line (NDJSON).
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `ibancheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more IBANs and show their decomposition.
    ///
    /// Each argument is normalized first (whitespace removed, uppercased),
    /// so the printed form "GB82 WEST 1234 5698 7654 32" may be passed as a
    /// single quoted argument.
    Validate {
        /// IBANs to validate.
        #[arg(value_name = "IBAN", num_args = 1.., required = true)]
        ibans: Vec<String>,
    },

    /// Validate a file of IBANs, one per line.
    Batch {
        /// Path to a text file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List the supported countries, or show one country's BBAN layout.
    Countries {
        /// Two-letter country code to describe.
        #[arg(value_name = "CODE")]
        code: Option<String>,
        /// Check every layout for gaps, overlaps, and dangling aliases.
        #[arg(long, conflicts_with = "code")]
        check: bool,
    },

    /// Print the ibancheck-core library version.
    Version,
}

/// Root CLI struct for the `ibancheck` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "ibancheck",
    version,
    about = "IBAN validation and decomposition",
    long_about = "Validates International Bank Account Numbers against per-country\n\
                  BBAN layouts and the ISO 7064 MOD 97-10 checksum, and shows\n\
                  each IBAN's decomposition into bank, branch, and account fields."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress summaries and warnings on stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug logging, and field decompositions in batch mode
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum batch input size in bytes.
    ///
    /// Can also be set via the `IBANCHECK_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "IBANCHECK_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
