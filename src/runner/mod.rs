//! Check orchestration.
//!
//! The [`Runner`] executes checks one after another in declaration order.
//! Every check is isolated: an error or a panic inside one is downgraded to
//! a failed [`CheckResult`] and the next check still runs.

pub mod summary;

pub use summary::print_summary;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::checks::{standard_checks, Check, CheckOutcome, HttpProbe};
use crate::config::{Environment, VerifierConfig};
use crate::error::Result;
use crate::ui::{hints, UserInterface};

/// Banner printed at the start of a run.
pub const TITLE: &str = "Creative Visual Coding App - Setup Test";

/// Pass/fail outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
}

/// Results of a run, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    results: Vec<CheckResult>,
}

impl VerificationReport {
    /// All results in order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of passing checks.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of checks run.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Whether the named check ran and passed.
    pub fn passed_check(&self, name: &str) -> bool {
        self.results.iter().any(|r| r.name == name && r.passed)
    }

    fn push(&mut self, name: &str, passed: bool) {
        self.results.push(CheckResult {
            name: name.to_string(),
            passed,
        });
    }
}

/// Runs checks and renders their outcomes.
pub struct Runner<'u> {
    ui: &'u mut dyn UserInterface,
}

impl<'u> Runner<'u> {
    pub fn new(ui: &'u mut dyn UserInterface) -> Self {
        Self { ui }
    }

    /// Run every check once, in order.
    pub fn run(&mut self, checks: &[Box<dyn Check + '_>]) -> VerificationReport {
        let mut report = VerificationReport::default();
        for check in checks {
            let passed = self.run_one(check.as_ref());
            report.push(check.name(), passed);
        }
        report
    }

    fn run_one(&mut self, check: &dyn Check) -> bool {
        self.ui.show_section(check.name());
        let mut spinner = self.ui.start_spinner(check.announce());

        match panic::catch_unwind(AssertUnwindSafe(|| check.run())) {
            Ok(Ok(outcome)) => {
                tracing::info!(check = check.name(), "passed");
                spinner.finish_success(&outcome.summary);
                self.show_details(&outcome);
                true
            }
            Ok(Err(err)) => {
                tracing::info!(check = check.name(), error = %err, "failed");
                spinner.finish_error(&format!("{} failed: {}", check.name(), err));
                if let Some(hint) = hints::for_error(&err) {
                    self.ui.show_hint(&hint);
                }
                false
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::warn!(check = check.name(), %reason, "crashed");
                spinner.finish_error(&format!("{} test crashed: {}", check.name(), reason));
                false
            }
        }
    }

    fn show_details(&mut self, outcome: &CheckOutcome) {
        for detail in &outcome.details {
            self.ui.message(&format!("   {}", detail));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run the standard suite against `config` and print the summary.
pub fn run_verification(
    env: &Environment,
    config: &VerifierConfig,
    ui: &mut dyn UserInterface,
) -> Result<VerificationReport> {
    let probe = HttpProbe::new()?;
    let checks = standard_checks(env, config, &probe);

    ui.show_header(TITLE);
    let report = Runner::new(ui).run(&checks);
    print_summary(&report, config, ui);
    Ok(report)
}
