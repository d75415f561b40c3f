//! Command-line argument definitions.

use crate::types::{Credentials, ReportId};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed for any invalid invocation
pub const USAGE: &str = "report-fetch <username> <password> <reportId> <destinationPath>";

/// Download a usage report and write its rows to a file
///
/// Positionals accept values starting with `-`, so options go after them.
#[derive(Parser)]
#[command(name = "report-fetch", author, version, about, long_about = None)]
pub struct Cli {
    /// User key of the account requesting the report
    #[arg(allow_hyphen_values = true)]
    pub username: String,

    /// Password of the account
    #[arg(allow_hyphen_values = true)]
    pub password: String,

    /// Report identifier (UUID)
    pub report_id: ReportId,

    /// File the report rows are written to (overwritten if present)
    #[arg(allow_hyphen_values = true)]
    pub destination: PathBuf,

    /// Service host, overriding the persisted setting
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Settings file holding the service host
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

/// Outcome of argument parsing
pub enum Invocation {
    /// Arguments were valid
    Run(Cli),
    /// Arguments were invalid; print [`USAGE`] and exit
    Usage,
}

impl Cli {
    /// Parse arguments (program name first) without exiting the process
    ///
    /// Any parse failure, including a malformed report identifier, collapses
    /// into [`Invocation::Usage`].
    pub fn parse_invocation<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Invocation::Run(cli),
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "invalid invocation");
                Invocation::Usage
            }
        }
    }

    /// Credentials supplied on the command line
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

/// Print the usage line to stdout
pub fn print_usage() {
    println!("{USAGE}");
}
