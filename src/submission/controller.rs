use tracing::info;

use crate::api::compare::CompareClient;
use crate::api::error::ApiError;
use crate::scenario::types::{ComparisonResult, ScenarioInput};
use crate::scenario::validate::{validate, FieldErrors, ValidScenario};

const GENERIC_FAILURE: &str = "Compare request failed";

/// The one displayed state. Replaced wholesale on every transition, never
/// patched, so the presenter can only ever observe a complete state.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    FieldErrors(FieldErrors),
    Submitting,
    Success(ComparisonResult),
    Failure(String),
}

pub struct SubmissionController {
    client: CompareClient,
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new(client: CompareClient) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a fresh attempt: prior errors and results are dropped before
    /// the new input is even validated. Returns the validated scenario when
    /// the network call should proceed.
    pub fn begin(&mut self, input: &ScenarioInput) -> Option<ValidScenario> {
        self.state = SubmissionState::Idle;

        match validate(input) {
            Ok(valid) => {
                self.state = SubmissionState::Submitting;
                Some(valid)
            }
            Err(errors) => {
                self.state = SubmissionState::FieldErrors(errors);
                None
            }
        }
    }

    /// Apply a finished network call to the slot. Overwrites whatever is
    /// there: with overlapping submissions the last resolution wins, even
    /// when it belongs to an older attempt.
    pub fn resolve(&mut self, outcome: Result<ComparisonResult, ApiError>) {
        self.state = match outcome {
            Ok(result) => SubmissionState::Success(result),
            Err(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                };
                SubmissionState::Failure(message)
            }
        };
    }

    /// One full user-initiated attempt: validate, then submit, then record
    /// the outcome. No automatic retry.
    pub async fn submit(&mut self, input: &ScenarioInput) {
        let Some(valid) = self.begin(input) else {
            return;
        };

        info!(
            "Submitting scenario: {} / {} stake {}",
            valid.request.equity_symbol, valid.request.bet.league, valid.request.bet.stake
        );

        let outcome = self.client.submit(&valid.request, &valid.window).await;
        self.resolve(outcome);
    }
}
