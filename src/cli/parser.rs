use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFranklin
/// Guided writing exercise backed by SQLite
#[derive(Parser)]
#[command(
    name = "rfranklin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Franklin writing exercise: take notes, reconstruct, correct, versify, re-prose and recall",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (schema, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create missing tables")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Append a new empty exercise and select it
    New,

    /// Remove an exercise by row number
    Remove {
        /// Row number as shown by `list` (1-based)
        row: usize,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List exercises
    List,

    /// Select an exercise and go back to step 1
    Select {
        /// Row number as shown by `list` (1-based)
        row: usize,
    },

    /// Move the selected exercise to another step (1-6)
    Step {
        /// 1 Take Notes, 2 Reconstruct, 3 Corrections, 4 As Poetry, 5 Back to Prose, 6 Jumble
        number: u8,

        #[arg(
            long,
            help = "Overwrite existing corrections with the rewrite without asking"
        )]
        overwrite: bool,
    },

    /// Show the current step of the selected exercise
    Show,

    /// Edit a field of the selected exercise
    Set {
        /// Author, Source, Original, Notes, Rewrite, Correction, Poetry or Prose
        field: String,

        /// New value (read from --file or stdin when omitted)
        value: Option<String>,

        #[arg(long, value_name = "FILE", conflicts_with = "value")]
        file: Option<String>,
    },

    /// Shuffle the notes of the selected exercise into tiles
    Jumble {
        #[arg(long, help = "Seed for a reproducible shuffle")]
        seed: Option<u64>,
    },

    /// Show the notes lines in their original order
    Reveal,

    /// Print the distinct values of a field (for completion)
    Complete {
        field: String,

        prefix: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export all exercises
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
