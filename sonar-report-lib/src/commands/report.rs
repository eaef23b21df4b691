use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use crate::Result;
use crate::api::{ApiError, Client, Shutdown};
use crate::config::Config;
use crate::metrics::METRIC_DEFINITIONS;
use crate::reports::{Report, Template, assemble, render};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::fs::OpenOptions;
use std::io::Write;

const LOG_TARGET: &str = "   report";

/// Exit code when the quality gate did not pass
pub const EXIT_GATE_FAILED: i32 = 1;

/// Exit code when the report could not be produced at all
pub const EXIT_ERROR: i32 = 3;

/// Exit code when report generation was interrupted
pub const EXIT_CANCELLED: i32 = 130;

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0    the quality gate passed
  1    the quality gate did not pass (the report is still written)
  2    invalid command line
  3    the report could not be produced (server unreachable, rejected request, unwritable output)
  130  interrupted";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "sonar-report", author, version, long_about = None)]
#[command(about = "Generate a Markdown report for a project analysis")]
#[command(styles = CLAP_STYLES, after_help = EXIT_CODES_HELP)]
pub struct ReportArgs {
    /// The project key on the analysis server
    #[arg(short = 'p', long = "projectkey", value_name = "KEY")]
    pub project_key: String,

    /// Pull request to report on, keep empty for a whole-project report
    #[arg(long = "pullrequest", value_name = "ID", default_value = "")]
    pub pull_request: String,

    /// Base URL of the analysis server
    #[arg(short = 'u', long = "url", value_name = "URL", value_parser = parse_host_url)]
    pub url: String,

    /// Authentication token for the analysis server
    #[arg(short = 't', long, value_name = "TOKEN", env = "SONAR_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Where to write the formatted report
    #[arg(short = 'o', long, value_name = "PATH", default_value = "./report-out.md")]
    pub output: Utf8PathBuf,

    /// Layout of the report
    #[arg(long, value_name = "TEMPLATE", value_enum, default_value_t = Template::GithubSmall)]
    pub template: Template,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl From<&ReportArgs> for Config {
    fn from(args: &ReportArgs) -> Self {
        Self {
            project_key: args.project_key.clone(),
            host: args.url.clone(),
            token: args.token.clone(),
            output: args.output.clone(),
            template: args.template,
            pull_request: args.pull_request.clone(),
        }
    }
}

fn parse_host_url(s: &str) -> core::result::Result<String, String> {
    let url = url::Url::parse(s).map_err(|e| format!("invalid URL '{s}': {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported URL scheme '{}' in '{s}', expected http or https", url.scheme()));
    }
    Ok(s.to_string())
}

/// Fetch the analysis of the configured project, write the rendered report, and
/// exit with a code reflecting the quality gate.
pub async fn process_report<H: Host>(host: &mut H, args: &ReportArgs, shutdown: Shutdown) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::from(args);
    log::debug!(target: LOG_TARGET, "Generating report with {config:?}");

    let client = Client::new(config.host.clone(), &config.token, shutdown.clone())?;

    let report = match assemble(METRIC_DEFINITIONS, &config, &client).await {
        Ok(report) if !shutdown.is_requested() => report,
        Ok(_) | Err(ApiError::Cancelled) => {
            report_cancelled(host);
            return Ok(());
        }
        Err(e) => {
            return Err(e).into_app_err_with(|| format!("could not generate a report for project '{}'", config.project_key));
        }
    };

    let mut text = String::new();
    render(config.template, &report.context, &mut text)?;
    save_report(&config.output, &text)?;

    write_summary(host, &config, &report, args.color.use_colors());

    if !report.passed {
        host.exit(EXIT_GATE_FAILED);
    }

    Ok(())
}

fn report_cancelled<H: Host>(host: &mut H) {
    log::debug!(target: LOG_TARGET, "Cancelled before the report was saved");
    let _ = writeln!(host.error(), "Report generation cancelled");
    host.exit(EXIT_CANCELLED);
}

/// Write the report to `path`, refusing to replace an existing file.
fn save_report(path: &Utf8Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .into_app_err_with(|| format!("could not create report file '{path}'"))?;

    file.write_all(text.as_bytes())
        .into_app_err_with(|| format!("could not write report file '{path}'"))?;

    log::debug!(target: LOG_TARGET, "Wrote {} bytes to '{path}'", text.len());
    Ok(())
}

fn write_summary<H: Host>(host: &mut H, config: &Config, report: &Report, use_colors: bool) {
    let status = &report.context.gate_status;
    let colored_status = match (use_colors, report.passed) {
        (false, _) => status.to_string(),
        (true, true) => status.green().bold().to_string(),
        (true, false) => status.red().bold().to_string(),
    };

    let _ = writeln!(
        host.output(),
        "Quality gate {colored_status} for {}: report written to {}",
        config.project_key, config.output
    );
}
