//! Demo program: a couple of `Vec` tests run by the toytest harness
//!
//! The second test fails on purpose to show the failure report.


use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let summary = toytest::run_registered()?;
    Ok(summary.exit_code())
}
