//! Access to the code-analysis server's HTTP API
//!
//! # Implementation Model
//!
//! The [`Client`] issues authenticated `GET` requests (bearer token, fixed
//! timeout) and decodes the JSON bodies into the types in [`models`]. Unknown
//! JSON fields are ignored so newer server versions keep working.
//!
//! Every call either yields a decoded value or an [`ApiError`] that tells the
//! failure kinds apart: the server could not be reached or timed out, it answered with a
//! non-200 status (the body is kept verbatim and never decoded), the body did
//! not decode, or the caller's [`Shutdown`] fired while the call was in flight.
//! No retries are attempted.

mod api_error;
mod client;
pub mod models;
mod shutdown;

pub use api_error::ApiError;
pub use client::{Client, REQUEST_TIMEOUT, endpoint_url};
pub use models::{ComponentMeasures, ComponentWithMetrics, Measure, MeasurePeriod, Metric, ProjectStatus};
pub use shutdown::{Shutdown, ShutdownTrigger};
