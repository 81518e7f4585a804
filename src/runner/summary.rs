//! End-of-run summary.

use crate::config::VerifierConfig;
use crate::ui::{hints, StatusKind, UserInterface};

use super::VerificationReport;

/// Name of the check whose failure triggers the setup tips.
const ENVIRONMENT_CHECK: &str = "Environment";

/// Print per-check results, the tally, and the closing advice.
pub fn print_summary(
    report: &VerificationReport,
    config: &VerifierConfig,
    ui: &mut dyn UserInterface,
) {
    ui.show_section("Test Results Summary");
    for result in report.results() {
        ui.show_status(StatusKind::from(result.passed), &result.name);
    }

    ui.message(&format!(
        "\nOverall: {}/{} tests passed",
        report.passed(),
        report.total()
    ));

    if report.all_passed() {
        ui.success(hints::all_passed());
        ui.message("\nAccess your app:");
        ui.message(&format!("   Frontend: {}", config.frontend_root()));
        ui.message(&format!("   API Docs: {}", config.api_docs_url()));
        return;
    }

    ui.warning(hints::some_failed());
    if !report.passed_check(ENVIRONMENT_CHECK) {
        ui.message("\nTips:");
        for (i, tip) in hints::setup_tips(config).iter().enumerate() {
            ui.show_hint(&format!("{}. {}", i + 1, tip));
        }
    }
}
