use super::ReportContext;
use crate::Result;
use core::fmt::Write;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";

/// Characters left alone in badge text; shields.io gives `-` and `_` their own escaping.
const BADGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

const MISSING_VALUE: &str = "-";

/// Render a compact Markdown report suitable for a pull request comment.
pub fn generate<W: Write>(context: &ReportContext, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "## Quality Gate: ![{status}]({badge})",
        status = cell(&context.gate_status),
        badge = badge_url("quality gate", display_status(&context.gate_status), context.gate_status_color)
    )?;
    writeln!(writer)?;

    write!(writer, "Analysis of [{}]({})", cell(&context.project_name), context.project_dashboard_url)?;
    if let Some(pull_request) = &context.pull_request {
        write!(writer, " for pull request #{}", cell(pull_request))?;
    }
    writeln!(writer)?;
    writeln!(writer)?;

    if context.metrics.is_empty() {
        writeln!(writer, "_No metrics were reported for this analysis._")?;
        return Ok(());
    }

    let with_new_code = context.pull_request.is_some() || context.metrics.iter().any(|m| m.new_value.is_some());

    if with_new_code {
        writeln!(writer, "| Metric | Value | New code |")?;
        writeln!(writer, "| :--- | ---: | ---: |")?;
    } else {
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "| :--- | ---: |")?;
    }

    for metric in &context.metrics {
        write!(writer, "| {} | {} |", cell(&metric.name), cell(&metric.value))?;
        if with_new_code {
            write!(writer, " {} |", metric.new_value.as_deref().map_or_else(|| MISSING_VALUE.to_string(), cell))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn display_status(status: &str) -> &str {
    if status.is_empty() { "unknown" } else { status }
}

/// Build a static shields.io badge URL.
fn badge_url(label: &str, message: &str, color: &str) -> String {
    format!("{BADGE_BASE_URL}/{}-{}-{color}", badge_text(label), badge_text(message))
}

fn badge_text(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__");
    utf8_percent_encode(&escaped, BADGE_TEXT).to_string()
}

/// Make text safe to place in a Markdown table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
