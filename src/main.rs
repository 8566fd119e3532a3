mod api;
mod config;
mod present;
mod scenario;
mod submission;

use anyhow::Result;
use config::Config;

use api::compare::CompareClient;
use api::history::HistoryClient;
use present::render::{render_field_errors, render_history, render_result};
use scenario::types::ScenarioInput;
use submission::controller::{SubmissionController, SubmissionState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Scenario compare client starting...");

    // Load configuration
    let config = Config::load("config.toml")?;
    let base_url = config.base_url();

    // Constructor-time check: misconfiguration fails here, not as a
    // confusing network error later.
    let compare_client = CompareClient::new(&base_url)?;
    let history_client = HistoryClient::new(&base_url)?;

    let scenario_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scenario.toml".to_string());
    tracing::info!("Loading scenario: {}", scenario_path);
    let input = ScenarioInput::load(&scenario_path)?;

    let mut controller = SubmissionController::new(compare_client);
    controller.submit(&input).await;

    match controller.state() {
        SubmissionState::Success(result) => {
            println!("{}", render_result(result));
        }
        SubmissionState::FieldErrors(errors) => {
            tracing::warn!("Scenario rejected by validation");
            println!("{}", render_field_errors(errors));
        }
        SubmissionState::Failure(message) => {
            tracing::error!("Submission failed: {}", message);
            println!("Error: {}", message);
        }
        SubmissionState::Idle | SubmissionState::Submitting => {
            // submit() always resolves before returning.
        }
    }

    match history_client
        .list(config.history.limit, config.history.offset)
        .await
    {
        Ok(entries) => {
            tracing::info!("Fetched {} history entries", entries.len());
            println!("{}", render_history(&entries));
        }
        Err(e) => {
            tracing::warn!("History fetch failed: {}", e);
        }
    }

    Ok(())
}
