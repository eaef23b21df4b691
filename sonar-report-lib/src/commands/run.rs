//! Command-line entry point for sonar-report

use super::{EXIT_ERROR, ReportArgs, process_report};
use crate::api::Shutdown;
use crate::{Host, Result};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments and generate the report
///
/// This function is designed to be called from main.rs with the program arguments.
/// Argument errors, `--help` and `--version` are written to the host and end with
/// `host.exit` rather than terminating the process from library code.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
/// * `shutdown` - Signal that interrupts in-flight requests to the analysis server
///
/// # Errors
///
/// Returns an error if the report cannot be generated or saved
pub async fn run<I, T, H>(host: &mut H, args: I, shutdown: Shutdown) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = match ReportArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            let rendered = e.render();
            let _ = if e.use_stderr() {
                write!(host.error(), "{rendered}")
            } else {
                write!(host.output(), "{rendered}")
            };
            host.exit(e.exit_code());
            return Ok(());
        }
    };

    process_report(host, &args, shutdown).await
}

/// Report an error returned by [`run`] and exit with [`EXIT_ERROR`]
///
/// Keeps fatal errors apart from a failed quality gate in the process exit code.
pub fn exit_with_error<H: Host>(host: &mut H, error: &ohno::AppError) {
    let _ = writeln!(host.error(), "Error: {error}");
    host.exit(EXIT_ERROR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[tokio::test]
    async fn test_missing_arguments_exit_with_usage_error() {
        let mut host = TestHost::new();

        run(&mut host, ["sonar-report", "-u", "https://x.io", "-t", "token"], Shutdown::never())
            .await
            .unwrap();

        assert_eq!(host.exit_code, Some(2));
        assert!(host.error_str().contains("--projectkey"));
        assert!(host.output_str().is_empty());
    }

    #[tokio::test]
    async fn test_help_goes_to_output() {
        let mut host = TestHost::new();

        run(&mut host, ["sonar-report", "--help"], Shutdown::never()).await.unwrap();

        assert_eq!(host.exit_code, Some(0));
        assert!(host.output_str().contains("--pullrequest"));
        assert!(host.output_str().contains("github-small"));
        assert!(host.error_str().is_empty());
    }

    #[test]
    fn test_exit_with_error_uses_its_own_code() {
        let mut host = TestHost::new();
        let error = ohno::app_err!("could not generate a report for project 'proj1'");

        exit_with_error(&mut host, &error);

        assert_eq!(host.exit_code, Some(EXIT_ERROR));
        assert_ne!(EXIT_ERROR, crate::EXIT_GATE_FAILED);
        assert!(host.error_str().starts_with("Error: could not generate a report for project 'proj1'"));
        assert!(host.output_str().is_empty());
    }

    #[tokio::test]
    async fn test_help_lists_exit_codes() {
        let mut host = TestHost::new();

        run(&mut host, ["sonar-report", "--help"], Shutdown::never()).await.unwrap();

        assert!(host.output_str().contains("Exit codes:"));
        assert!(host.output_str().contains("130  interrupted"));
    }

    #[tokio::test]
    async fn test_version_goes_to_output() {
        let mut host = TestHost::new();

        run(&mut host, ["sonar-report", "--version"], Shutdown::never()).await.unwrap();

        assert_eq!(host.exit_code, Some(0));
        assert!(host.output_str().starts_with("sonar-report "));
    }
}
