//! Report assembly and rendering
//!
//! This module turns what the analysis server reports about a project into a
//! document for human consumption.
//!
//! # Implementation Model
//!
//! Assembly and rendering are separate steps:
//!
//! - **Assembly** ([`assemble`], [`build_report`]) joins the metric catalog with
//!   the measures response and the quality gate status. The result is a
//!   [`Report`]: the pass/fail verdict plus a [`ReportContext`] holding the gate
//!   status, project name, dashboard URL and an ordered list of
//!   [`TemplateMetric`] rows.
//! - **Rendering** ([`render`]) turns a context into text using one of the
//!   built-in [`Template`]s:
//!   - **GitHub small**: compact Markdown for a pull request comment
//!   - **JSON**: the render context itself, for downstream tooling
//!
//! Rows follow catalog order, never server response order. A catalog metric the
//! server did not measure has no row. A row carries a new-code value only when
//! its metric has a `new_` variant and the server reported that variant.

mod assembler;
mod json;
mod markdown;
mod report_context;
mod template;
mod template_metric;

pub use assembler::{assemble, build_report, project_dashboard_url};
pub use report_context::{Report, ReportContext};
pub use template::Template;
pub use template_metric::TemplateMetric;

use crate::Result;
use core::fmt::Write;

/// Render a report context with the given template.
pub fn render<W: Write>(template: Template, context: &ReportContext, writer: &mut W) -> Result<()> {
    match template {
        Template::GithubSmall => markdown::generate(context, writer),
        Template::Json => json::generate(context, writer),
    }
}
