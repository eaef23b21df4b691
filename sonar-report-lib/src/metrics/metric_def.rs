/// Prefix the server uses for metrics computed on code changed since the baseline.
pub const NEW_METRIC_PREFIX: &str = "new_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub key: &'static str,

    /// Whether the server also reports a `new_`-prefixed variant of this metric
    pub can_be_new: bool,
}

impl MetricDef {
    /// Key of the delta variant of this metric, if one exists.
    #[must_use]
    pub fn new_key(&self) -> Option<String> {
        self.can_be_new.then(|| new_key(self.key))
    }
}

/// Build the delta key for a metric key.
#[must_use]
pub fn new_key(key: &str) -> String {
    format!("{NEW_METRIC_PREFIX}{key}")
}

macro_rules! metric_def {
    ($key:expr, $can_be_new:expr) => {
        MetricDef {
            key: $key,
            can_be_new: $can_be_new,
        }
    };
}

/// The metrics shown in a report, in display order.
pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!("lines", true),
    metric_def!("ncloc", false),
    metric_def!("bugs", true),
    metric_def!("vulnerabilities", true),
    metric_def!("security_hotspots", true),
    metric_def!("code_smells", true),
    metric_def!("coverage", true),
    metric_def!("duplicated_lines_density", true),
    metric_def!("complexity", false),
];

/// Metric keys to request from the server.
///
/// A whole-project report asks for the plain keys only. A pull-request report
/// also asks for the `new_` variant of every metric that has one, right after
/// its plain key.
#[must_use]
pub fn metric_keys(catalog: &[MetricDef], is_pull_request: bool) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|def| {
            let delta = if is_pull_request { def.new_key() } else { None };
            core::iter::once(def.key.to_string()).chain(delta)
        })
        .collect()
}
