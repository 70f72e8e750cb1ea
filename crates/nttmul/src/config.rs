//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use nttmul_core::constants::DEFAULT_MAX_TRANSFORM_SIZE;
use nttmul_core::memory_budget::parse_memory_limit;
use nttmul_core::multiplier::MulError;
use nttmul_core::options::Options;

/// nttmul: multiply arbitrarily long decimal integers.
///
/// Reads two numerals from the arguments, or two whitespace-separated tokens
/// from standard input, and prints their product.
#[derive(Parser, Debug)]
#[command(name = "nttmul", version, about)]
pub struct AppConfig {
    /// The two numerals to multiply (read from stdin when omitted).
    #[arg(value_name = "NUMERAL", num_args = 0..=2)]
    pub operands: Vec<String>,

    /// Multiplier to use: ntt, schoolbook, bigint, or all.
    #[arg(long, default_value = "ntt", env = "NTTMUL_ALGO")]
    pub algo: String,

    /// Largest transform length allowed (power of two, at most 2^27).
    #[arg(long, default_value_t = DEFAULT_MAX_TRANSFORM_SIZE, env = "NTTMUL_MAX_TRANSFORM_SIZE")]
    pub max_transform_size: usize,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Show algorithm, timing and digit count on stderr.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose output: debug logging and untruncated comparisons.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the product to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build validated multiplication options.
    pub fn options(&self) -> Result<Options, MulError> {
        let memory_limit = parse_memory_limit(&self.memory_limit).map_err(MulError::Config)?;
        let opts = Options {
            max_transform_size: self.max_transform_size,
            memory_limit,
        }
        .normalize();
        opts.validate()?;
        Ok(opts)
    }

    /// Default log level when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
