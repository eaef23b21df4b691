//! The catalog of metrics tracked in a report
//!
//! Each [`MetricDef`] names a metric key on the analysis server and whether the
//! server also publishes a `new_`-prefixed variant of it, scoped to code that
//! changed since the baseline. The catalog order is the order rows appear in
//! the rendered report.
//!
//! The delta pairing is purely name based: the delta of `bugs` is whatever the
//! server reports under `new_bugs`.

mod metric_def;

pub use metric_def::{METRIC_DEFINITIONS, MetricDef, NEW_METRIC_PREFIX, metric_keys, new_key};
