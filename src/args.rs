//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

use crate::charts::RangeMode;

/// lekhajokha: a local-only expense and monthly budget tracker.
///
/// Run without a subcommand to open the interactive dashboard. Every
/// subcommand reads and writes the same data file as the dashboard.
#[derive(Debug, Parser, Clone)]
#[command(name = "lekhajokha", version)]
pub(crate) struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub(crate) fn common(&self) -> &Common {
        &self.common
    }

    pub(crate) fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub(crate) struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory holding the database, the log file and default exports.
    /// Defaults to the platform data directory.
    #[arg(long, global = true, env = "LEKHAJOKHA_HOME")]
    home: Option<PathBuf>,
}

impl Common {
    pub(crate) fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub(crate) fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Record an expense.
    Add {
        /// Category name, e.g. Food
        category: String,
        /// Amount in rupees
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(long, short)]
        description: Option<String>,
        /// Display date as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense by id.
    Delete { id: String },
    /// List expenses grouped by date, newest first.
    List,
    /// Today's spending and this month's budget balance.
    Summary,
    /// Savings tips for the current month.
    Tips,
    /// Per-day totals and category shares for a seven-day range.
    Chart {
        #[arg(long, value_enum, default_value_t = RangeMode::Last7Days)]
        range: RangeMode,
    },
    /// Add a custom category.
    Category {
        name: String,
        /// Icon name from `lekhajokha icons`
        #[arg(long)]
        icon: Option<String>,
    },
    /// Set the monthly budget.
    Budget {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Toggle between the light and dark palette.
    Theme,
    /// Write all expenses to a CSV file.
    Export {
        /// Output file or directory. Defaults to the data directory.
        path: Option<PathBuf>,
    },
    /// List icon names, optionally filtered.
    Icons { query: Option<String> },
}
