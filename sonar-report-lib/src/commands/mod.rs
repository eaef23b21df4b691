//! Command-line interface and orchestration for sonar-report
//!
//! This module is the boundary between the process and the report logic. It
//! parses arguments, resolves them into a [`Config`](crate::config::Config),
//! drives report assembly and rendering, saves the result, and maps the outcome
//! onto the process exit code.
//!
//! ## Execution Flow
//!
//! 1. Parse arguments with clap and initialize logging
//! 2. Fetch measures and the quality gate status from the analysis server
//! 3. Assemble and render the report with the selected template
//! 4. Write the report to the output path (never overwriting an existing file)
//! 5. Exit with `0` when the gate passed, [`EXIT_GATE_FAILED`] otherwise
//!
//! Fatal errors end with [`EXIT_ERROR`] and an interrupted run with [`EXIT_CANCELLED`].
//!
//! All console output goes through the [`Host`] trait so the whole flow can be
//! exercised in tests.

mod common;
mod host;
mod report;
mod run;

pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use report::{EXIT_CANCELLED, EXIT_ERROR, EXIT_GATE_FAILED, ReportArgs, process_report};
pub use run::{exit_with_error, run};
