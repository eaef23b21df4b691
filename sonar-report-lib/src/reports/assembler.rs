use super::{Report, ReportContext, TemplateMetric};
use crate::api::{ApiError, Client, ComponentWithMetrics, Metric, ProjectStatus, endpoint_url};
use crate::config::Config;
use crate::metrics::{MetricDef, metric_keys};
use std::collections::HashMap;

const LOG_TARGET: &str = "assembler";

/// Fetch measures and gate status for the configured project and assemble them into a report.
///
/// Both requests are in flight at the same time. The first failure aborts the
/// report and is returned as is.
pub async fn assemble(catalog: &[MetricDef], config: &Config, client: &Client) -> Result<Report, ApiError> {
    let keys = metric_keys(catalog, config.is_pull_request());

    let (measures, status) = tokio::try_join!(
        client.fetch_measures(&config.project_key, &config.pull_request, &keys),
        client.fetch_project_status(&config.project_key),
    )?;

    Ok(build_report(catalog, config, &measures, &status))
}

/// Join the catalog with a measures response and a gate status.
///
/// Rows follow catalog order. Catalog entries without a measured value are
/// left out.
#[must_use]
pub fn build_report(catalog: &[MetricDef], config: &Config, measures: &ComponentWithMetrics, status: &ProjectStatus) -> Report {
    let metrics_by_key: HashMap<&str, &Metric> = measures.metrics.iter().map(|m| (m.key.as_str(), m)).collect();
    let values_by_key: HashMap<&str, &str> = measures
        .component
        .measures
        .iter()
        .filter_map(|measure| measure.value().map(|value| (measure.metric.as_str(), value)))
        .collect();

    let metrics: Vec<TemplateMetric> = catalog
        .iter()
        .filter_map(|def| {
            let value = values_by_key.get(def.key)?;
            let new_value = def.new_key().and_then(|key| values_by_key.get(key.as_str()).copied());
            Some(TemplateMetric::new(def.key, metrics_by_key.get(def.key).copied(), value, new_value))
        })
        .collect();

    log::debug!(
        target: LOG_TARGET,
        "Assembled {} of {} catalog metrics for component '{}' ({})",
        metrics.len(),
        catalog.len(),
        measures.component.key,
        measures.component.name
    );

    let passed = status.passed();
    let context = ReportContext {
        gate_status_bool: passed,
        gate_status: status.status.clone(),
        gate_status_color: if passed { "green" } else { "red" },
        project_name: config.project_key.clone(),
        project_dashboard_url: project_dashboard_url(&config.host, &config.project_key, &config.pull_request),
        pull_request: config.is_pull_request().then(|| config.pull_request.clone()),
        metrics,
    };

    Report { passed, context }
}

/// Link to the project's dashboard on the server, scoped to the pull request if there is one.
#[must_use]
pub fn project_dashboard_url(host: &str, project_key: &str, pull_request: &str) -> String {
    let mut url = endpoint_url(host, &format!("dashboard?id={project_key}"));
    if !pull_request.is_empty() {
        url.push_str("&pullRequest=");
        url.push_str(pull_request);
    }
    url
}
