//! # report-fetch
//!
//! Downloads a usage report from the Panopto UsageReporting public API and
//! writes its rows to a local file.
//!
//! The GetReport operation answers with a zip archive instead of a SOAP
//! envelope, so the exchange is done by hand: the request envelope is
//! rendered as text, POSTed over HTTPS, and the body is decoded as an archive
//! whose first entry holds the report rows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use report_fetch::{Config, Credentials, ReportClient, ReportId};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> report_fetch::Result<()> {
//!     let client = ReportClient::new(&Config::new("demo.hosted.panopto.com"))?;
//!     let credentials = Credentials::new("alice", "secret");
//!     let report_id: ReportId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse()?;
//!
//!     let rows =
//!         report_fetch::download_report(&client, &credentials, report_id, Path::new("out.txt"))
//!             .await?;
//!     println!("wrote {rows} rows");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Report archive decoding
pub mod archive;
/// Command-line arguments
pub mod cli;
/// UsageReporting client
pub mod client;
/// Configuration types
pub mod config;
/// Request envelope rendering
pub mod envelope;
/// Error types
pub mod error;
/// Destination file writing
pub mod output;
/// Core types
pub mod types;

// Re-export commonly used types
pub use archive::{ReportArchive, ReportLines};
pub use client::ReportClient;
pub use config::Config;
pub use error::{ArchiveError, Error, ErrorCategory, Result, ToExitCode};
pub use output::write_lines;
pub use types::{Credentials, ReportId};

use std::path::Path;

/// Fetch a report and write its rows to `destination`
///
/// Returns the number of rows written.
pub async fn download_report(
    client: &ReportClient,
    credentials: &Credentials,
    report_id: ReportId,
    destination: &Path,
) -> Result<usize> {
    let mut archive = client.fetch_report(credentials, report_id).await?;
    let rows = write_lines(destination, archive.lines()?)?;

    tracing::info!(%report_id, ?destination, rows, "report written");
    Ok(rows)
}

/// Run a parsed invocation: resolve the host, then download the report
pub async fn run(cli: cli::Cli) -> Result<usize> {
    let config = Config::resolve(cli.host.clone(), cli.settings.as_deref())?;
    let client = ReportClient::new(&config)?;
    download_report(&client, &cli.credentials(), cli.report_id, &cli.destination).await
}
