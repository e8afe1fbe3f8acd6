//! Command-line configuration.

use clap::Parser;
use clap_complete::Shell;

/// Command-line options for the `pihex` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pihex",
    version,
    about = "Extract hexadecimal digits of pi from an arbitrary position"
)]
pub struct AppConfig {
    /// Zero-based position of the first digit to extract.
    #[arg(
        short,
        long,
        default_value = "0",
        env = "PIHEX_START",
        allow_negative_numbers = true
    )]
    pub start: i64,

    /// Number of digits to extract.
    #[arg(
        short = 'n',
        long,
        default_value = "10",
        env = "PIHEX_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Extraction strategy (sequential, threads). Defaults to sequential.
    #[arg(long)]
    pub strategy: Option<String>,

    /// Worker thread count. Zero or negative means one per host core.
    #[arg(short, long, allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Emit the result as a JSON document on stdout.
    #[arg(long)]
    pub json: bool,

    /// Print only the digits, with no decoration.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the full digit string without truncation.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the extracted digits to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completion: Option<Shell>,
}

impl AppConfig {
    /// Parse the configuration from `std::env::args`.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
