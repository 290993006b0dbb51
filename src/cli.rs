use clap::{Parser, Subcommand};

use crate::menu::constants::DEFAULT_HISTORY_FILE;

/// Café ordering CLI: build drinks from a base and add-ons, print receipts,
/// and report on the day.
#[derive(Parser, Debug)]
#[command(name = "cafe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Optional JSON file with shop settings (name, tax_rate, open_on_start).
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the order history JSON file.
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Take orders interactively.
    Interactive,

    /// Print the menu.
    Menu,

    /// Place a single order from the command line.
    Order {
        /// Customer name.
        #[arg(long)]
        customer: String,

        /// Base drink: coffee, espresso, or cappuccino.
        #[arg(long)]
        drink: String,

        /// Cup size; unrecognized sizes are served as medium.
        #[arg(long, default_value = "medium")]
        size: String,

        /// Add-on such as milk=oat, sugar=honey:2, flavor=vanilla:1.5.
        #[arg(long = "add")]
        add_ons: Vec<String>,

        /// Mark the order as completed right away.
        #[arg(long)]
        complete: bool,
    },

    /// Print the report for the saved order history.
    Report {
        /// Also export the orders to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Place random orders and print the resulting report.
    Simulate {
        /// Number of orders to place.
        #[arg(long, default_value = "50")]
        orders: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
