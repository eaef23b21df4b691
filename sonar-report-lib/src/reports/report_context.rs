use super::TemplateMetric;
use serde::Serialize;

/// Everything a template can refer to when rendering a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    pub gate_status_bool: bool,
    pub gate_status: String,
    /// `green` when the gate passed, `red` otherwise
    pub gate_status_color: &'static str,
    pub project_name: String,
    pub project_dashboard_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<String>,
    pub metrics: Vec<TemplateMetric>,
}

/// The outcome of assembling a report: the gate verdict and the render context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub passed: bool,
    pub context: ReportContext,
}
