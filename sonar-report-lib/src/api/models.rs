//! Response shapes of the analysis server endpoints used by the client.
//!
//! Only the fields a report needs are modeled; anything else the server sends
//! is ignored.

use serde::{Deserialize, Serialize};

/// Human-readable identity of a metric, as returned alongside measures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metric {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Value of a measure restricted to the new-code period
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MeasurePeriod {
    pub value: Option<String>,
}

/// One observed value of one metric on the analyzed component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Measure {
    pub metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Some server versions report delta metrics here instead of in `value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<MeasurePeriod>,
}

impl Measure {
    #[must_use]
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: Some(value.into()),
            period: None,
        }
    }

    /// The effective value: `value` when present, the period value otherwise.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .or_else(|| self.period.as_ref().and_then(|period| period.value.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComponentMeasures {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub measures: Vec<Measure>,
}

/// Measures of a component plus the metadata of the metrics they refer to.
///
/// The metric list may hold more entries than were requested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComponentWithMetrics {
    pub component: ComponentMeasures,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// Quality gate verdict of a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectStatus {
    pub status: String,
}

impl ProjectStatus {
    /// Status value reported when the quality gate passed
    pub const PASSED: &'static str = "OK";

    /// Whether the quality gate passed. Anything but an exact `OK` is a failure.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Self::PASSED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WrappedProjectStatus {
    pub project_status: ProjectStatus,
}
