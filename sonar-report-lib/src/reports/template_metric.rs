use crate::api::Metric;
use serde::Serialize;

/// One report row: a metric's identity, its value, and its new-code value when the server reported one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMetric {
    pub key: String,
    pub name: String,
    pub description: String,
    pub value: String,
    #[serde(rename = "newValue", skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl TemplateMetric {
    /// Build a row from the server's metric metadata.
    ///
    /// Without metadata the key doubles as the display name.
    #[must_use]
    pub fn new(key: &str, metric: Option<&Metric>, value: &str, new_value: Option<&str>) -> Self {
        let (name, description) = metric.map_or_else(
            || (key.to_string(), String::new()),
            |m| (m.name.clone(), m.description.clone()),
        );

        Self {
            key: key.to_string(),
            name,
            description,
            value: value.to_string(),
            new_value: new_value.map(str::to_string),
        }
    }
}
