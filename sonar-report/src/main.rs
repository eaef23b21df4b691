//! Render a code-analysis quality gate and its metrics as a Markdown report.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use sonar_report_lib::{EXIT_CANCELLED, Host, Shutdown, exit_with_error, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that runs real OS commands.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() {
    let (trigger, shutdown) = Shutdown::new();

    // The first Ctrl-C cancels in-flight requests, a second one ends the process.
    let _ctrl_c = tokio::spawn(trigger.on_interrupts(tokio::signal::ctrl_c, || {
        std::process::exit(EXIT_CANCELLED);
    }));

    let mut host = RealHost;
    if let Err(e) = run(&mut host, std::env::args(), shutdown).await {
        exit_with_error(&mut host, &e);
    }
}
