use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use uuid::Uuid;

/// Raw scenario fields exactly as the user typed them. Everything is a
/// string until `validate` has looked at it; missing fields load as empty
/// strings and fail validation like any other bad value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioInput {
    #[serde(default)]
    pub starting_capital: String,
    #[serde(default)]
    pub equity_symbol: String,
    #[serde(default)]
    pub equity_weight: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub stake: String,
    #[serde(default)]
    pub odds: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub odds_date: String,
}

impl ScenarioInput {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path))?;

        let input: ScenarioInput = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse scenario file: {}", path))?;

        Ok(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

/// One bet leg of a validated request. `odds: None` serializes as JSON
/// `null`, which tells the server to resolve odds itself (possibly via
/// fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetLeg {
    pub league: String,
    pub event_id: String,
    pub stake: f64,
    pub odds: Option<f64>,
    pub outcome: Outcome,
}

/// A validated, immutable comparison request. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub starting_capital: f64,
    pub equity_symbol: String,
    pub equity_weight: f64,
    pub bet: BetLeg,
}

/// Query parameters derived from the same validated input. `odds_date` is
/// omitted from the query entirely when not provided.
#[derive(Debug, Clone, PartialEq)]
pub struct DateWindow {
    pub start: String,
    pub end: String,
    pub odds_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityOutcome {
    pub symbol: String,
    pub allocated: f64,
    pub pnl: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetOutcome {
    pub event: String,
    pub allocated: f64,
    pub pnl: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsMeta {
    pub snapshot_timestamp: Option<String>,
    pub resolved_odds: f64,
    pub fallback_used: bool,
}

/// Server-computed comparison outcome. The client never recomputes any of
/// these numbers, it only reformats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub starting_capital: f64,
    pub equity: EquityOutcome,
    pub bet: BetOutcome,
    pub combined_final: f64,
    pub roi_pct: f64,
    pub odds_meta: OddsMeta,
}

/// One stored comparison as returned by the history endpoint, newest first
/// (server-determined, not re-sorted here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub payload: ScenarioRequest,
    pub result: ComparisonResult,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
}
