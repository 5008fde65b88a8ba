//! quit-plan binary
//!
//! Reads one intake record as JSON (from the path given as the first
//! argument, or stdin) and writes the generated plan as JSON to stdout.
//! Logs go to stderr.

use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::info;

use quit_plan::adapters::clock::SystemClock;
use quit_plan::adapters::intake::JsonIntakeReader;
use quit_plan::application::{GenerateQuitPlanCommand, GenerateQuitPlanHandler};
use quit_plan::config::{AppConfig, LoggingConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let responses = match std::env::args().nth(1) {
        Some(path) => JsonIntakeReader::from_path(path)?,
        None => JsonIntakeReader::from_reader(io::stdin().lock())?,
    };

    let handler = GenerateQuitPlanHandler::new(Arc::new(SystemClock));
    let result = handler.handle(GenerateQuitPlanCommand { responses });

    info!(
        risk_level = %result.risk_assessment.level,
        dependency_level = %result.dependency_score.risk_level,
        badge = %result.badge.badge_type,
        "Generated quit plan"
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &result)?;
    writeln!(stdout)?;
    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(io::stderr);

    if config.is_json() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
