use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use range_curve::model::Side;

/// Range order toolkit: inspect rate curves and rebalance vault allocations
/// for a book of fixed-rate lend/borrow orders.
#[derive(Parser)]
#[command(name = "range-curve", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SideArg {
    Lend,
    Borrow,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Lend => Side::Lend,
            SideArg::Borrow => Side::Borrow,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema for book definitions
    Schema,

    /// Output an example book JSON to stdout
    Example,

    /// List the built-in curve presets
    Presets,

    /// Validate a book JSON file
    Validate {
        /// Path to the book JSON file
        file: PathBuf,
    },

    /// Sample one order's curve across the visible window
    Sample {
        /// Path to the book JSON file
        file: PathBuf,

        /// Order ID to sample
        #[arg(long)]
        order: String,

        /// Which side's curve to sample
        #[arg(long, value_enum, default_value = "lend")]
        side: SideArg,

        /// Zoom multiplier on the last knot's amount (minimum 0.5)
        #[arg(long, default_value = "1.0")]
        zoom: f64,

        /// Number of segments to sample
        #[arg(long, default_value = "100")]
        steps: usize,

        /// Print samples as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Apply one allocation edit to the book's vault and print the result
    Rebalance {
        /// Path to the book JSON file
        file: PathBuf,

        /// Allocation entry (order ID) to change
        #[arg(long)]
        entry: String,

        /// New allocation percentage (clamped to 0-100)
        #[arg(long)]
        percent: f64,

        /// Pending deposit into the vault (USD)
        #[arg(long, default_value = "0.0")]
        deposit: f64,

        /// Pending withdrawal from the vault (USD)
        #[arg(long, default_value = "0.0")]
        withdraw: f64,
    },
}
