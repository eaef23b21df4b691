#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for sonar-report
//!
//! This library holds all functionality of the sonar-report tool, which turns
//! a project's quality gate and metrics on a code-analysis server into a
//! Markdown report for pull requests and CI artifacts.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`config`]: Resolved settings of a report run
//! - [`metrics`]: The catalog of tracked metrics
//! - [`api`]: Client for the analysis server's HTTP API
//! - [`reports`]: Report assembly and rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod api;
pub mod config;
pub mod metrics;
pub mod reports;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub use crate::api::{Shutdown, ShutdownTrigger};
pub use crate::commands::{EXIT_CANCELLED, EXIT_ERROR, EXIT_GATE_FAILED, Host, exit_with_error, run};
