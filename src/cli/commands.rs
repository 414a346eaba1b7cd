//! CLI subcommand definitions
//!
//! Every batch command works on one directory decoded with one acquirer layout.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Acquirer and directory shared by batch commands
#[derive(Args, Debug, Clone)]
pub(crate) struct BatchArgs {
    /// Acquirer layout (e.g. cielovendas, redecredito, getnet; see `acquirers`)
    pub(crate) acquirer: String,

    /// Directory holding the settlement files
    pub(crate) dir: PathBuf,
}

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Rename every valid file to its canonical name
    Rename(BatchArgs),
    /// Show the periods covered by the files
    Periods(BatchArgs),
    /// Show the periods of a date window no file covers
    Gaps {
        #[command(flatten)]
        batch: BatchArgs,
        /// First day of the window (DD/MM/YYYY, YYYYMMDD or YYYY-MM-DD)
        init: String,
        /// Last day of the window, inclusive
        end: String,
    },
    /// Show the decoded header of every file
    Inspect(BatchArgs),
    /// List supported acquirer layouts
    Acquirers,
}
