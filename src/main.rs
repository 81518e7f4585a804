//! Setup Verifier entry point.

use std::process::ExitCode;

use setup_verifier::config::{Environment, VerifierConfig};
use setup_verifier::run_verification;
use setup_verifier::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise warnings only so the
/// report stays readable. Logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("setup_verifier=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    // Crashing checks are reported by the runner; keep the default hook's
    // backtrace noise out of the report.
    std::panic::set_hook(Box::new(|info| tracing::debug!("{}", info)));

    let mut ui = TerminalUI::new();

    let cwd = std::env::current_dir().unwrap_or_default();
    let env = Environment::load(&cwd);
    let config = VerifierConfig::from_env(&env);
    tracing::debug!("Verifying deployment with {:?}", config);

    match run_verification(&env, &config, &mut ui) {
        Ok(report) if report.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
