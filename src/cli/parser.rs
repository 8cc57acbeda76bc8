use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rAttendance
/// CLI application turning reloj control exports into payroll reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute lateness and overtime (50% / 25%) from reloj control timesheet exports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom policies)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
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

    /// Process a timesheet export and write the report
    Process {
        /// Timesheet export (.xls, either HTML or a real workbook)
        file: PathBuf,

        /// Output file (default: resultado.<ext> next to the input)
        #[arg(long = "out", short = 'o')]
        out: Option<PathBuf>,

        /// Output format (default from configuration, usually xlsx)
        #[arg(long = "format", short = 'f', value_enum)]
        format: Option<ExportFormat>,

        /// Overwrite an existing output file without asking
        #[arg(long = "force")]
        force: bool,

        /// Accept inputs without the .xls extension
        #[arg(long = "any-extension")]
        any_extension: bool,
    },

    /// Print the detail and summary tables without writing a file
    Inspect {
        /// Timesheet export to read
        file: PathBuf,
    },
}
