use report_fetch::ToExitCode;
use report_fetch::cli::{self, Cli, Invocation};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::parse_invocation(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Usage => {
            cli::print_usage();
            return ExitCode::SUCCESS;
        }
    };

    match report_fetch::run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "report download failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
