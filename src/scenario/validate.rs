use regex::Regex;
use std::sync::OnceLock;

use crate::scenario::types::{
    BetLeg, DateWindow, Outcome, ScenarioInput, ScenarioRequest,
};

static EVENT_ID_RE: OnceLock<Regex> = OnceLock::new();
static ODDS_RE: OnceLock<Regex> = OnceLock::new();

fn event_id_re() -> &'static Regex {
    EVENT_ID_RE.get_or_init(|| Regex::new(r"^[0-9a-f]{32}$").expect("event id pattern"))
}

fn odds_re() -> &'static Regex {
    // Strict numeric literal, optional sign and fraction. No exponents, no
    // unit suffixes.
    ODDS_RE.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("odds pattern"))
}

/// One optional message per known field. A fixed struct rather than a
/// string-keyed map so every field is covered at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub starting_capital: Option<String>,
    pub equity_symbol: Option<String>,
    pub equity_weight: Option<String>,
    pub league: Option<String>,
    pub event_id: Option<String>,
    pub stake: Option<String>,
    pub odds: Option<String>,
    pub outcome: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub odds_date: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// Set fields in declaration order, for rendering and assertions.
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        let all = [
            ("starting_capital", &self.starting_capital),
            ("equity_symbol", &self.equity_symbol),
            ("equity_weight", &self.equity_weight),
            ("league", &self.league),
            ("event_id", &self.event_id),
            ("stake", &self.stake),
            ("odds", &self.odds),
            ("outcome", &self.outcome),
            ("start", &self.start),
            ("end", &self.end),
            ("odds_date", &self.odds_date),
        ];

        all.into_iter()
            .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
            .collect()
    }
}

/// A validated request plus the query window derived from the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidScenario {
    pub request: ScenarioRequest,
    pub window: DateWindow,
}

fn parse_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Turn raw form strings into a typed request, collecting every field
/// violation in one pass. Pure and deterministic: no I/O, no hidden state.
pub fn validate(input: &ScenarioInput) -> Result<ValidScenario, FieldErrors> {
    let mut errors = FieldErrors::default();

    let starting_capital = match parse_number(&input.starting_capital) {
        Some(v) if v > 0.0 => Some(v),
        _ => {
            errors.starting_capital = Some("Starting capital must be > 0".to_string());
            None
        }
    };

    let equity_symbol = input.equity_symbol.trim();
    if equity_symbol.is_empty() {
        errors.equity_symbol = Some("Equity symbol required".to_string());
    }

    let equity_weight = match parse_number(&input.equity_weight) {
        Some(v) if v < 0.0 => {
            errors.equity_weight = Some("Equity weight >= 0".to_string());
            None
        }
        Some(v) if v > 1.0 => {
            errors.equity_weight = Some("Equity weight <= 1".to_string());
            None
        }
        Some(v) => Some(v),
        None => {
            errors.equity_weight = Some("Equity weight must be a number".to_string());
            None
        }
    };

    let league = input.league.trim();
    if league.is_empty() {
        errors.league = Some("League required".to_string());
    }

    // No case-folding: uppercase hex is rejected, not normalized.
    if !event_id_re().is_match(&input.event_id) {
        errors.event_id = Some("event_id must be 32-char lowercase hex".to_string());
    }

    let stake = match parse_number(&input.stake) {
        Some(v) if v > 0.0 => Some(v),
        _ => {
            errors.stake = Some("Stake must be > 0".to_string());
            None
        }
    };

    // Empty odds means "let the server resolve"; anything else must be a
    // strict numeric literal.
    let odds_raw = input.odds.trim();
    let odds = if odds_raw.is_empty() {
        Some(None)
    } else if odds_re().is_match(odds_raw) {
        parse_number(odds_raw).map(Some)
    } else {
        None
    };
    if odds.is_none() {
        errors.odds = Some("Odds must be numeric".to_string());
    }

    let outcome = match input.outcome.as_str() {
        "win" => Some(Outcome::Win),
        "loss" => Some(Outcome::Loss),
        _ => {
            errors.outcome = Some("Outcome must be 'win' or 'loss'".to_string());
            None
        }
    };

    if input.start.is_empty() {
        errors.start = Some("Start date required".to_string());
    }
    if input.end.is_empty() {
        errors.end = Some("End date required".to_string());
    }

    // Dates are YYYY-MM-DD, so lexical order is chronological order. The
    // cross-field violation lands on `end`, first message wins.
    if !input.start.is_empty() && !input.end.is_empty() && input.start > input.end {
        if errors.end.is_none() {
            errors.end = Some("End date must be >= start date".to_string());
        }
    }

    let odds_date = input.odds_date.trim();
    let odds_date = if odds_date.is_empty() {
        None
    } else {
        Some(odds_date.to_string())
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All unwraps above are guarded by the error collection: every None
    // produced an error, and we only get here with none set.
    let request = ScenarioRequest {
        starting_capital: starting_capital.unwrap_or_default(),
        equity_symbol: equity_symbol.to_string(),
        equity_weight: equity_weight.unwrap_or_default(),
        bet: BetLeg {
            league: league.to_string(),
            event_id: input.event_id.clone(),
            stake: stake.unwrap_or_default(),
            odds: odds.unwrap_or_default(),
            outcome: outcome.unwrap_or(Outcome::Win),
        },
    };

    let window = DateWindow {
        start: input.start.clone(),
        end: input.end.clone(),
        odds_date,
    };

    Ok(ValidScenario { request, window })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_input() -> ScenarioInput {
        ScenarioInput {
            starting_capital: "1000".to_string(),
            equity_symbol: "AAPL".to_string(),
            equity_weight: "0.7".to_string(),
            league: "NFL".to_string(),
            event_id: "0123456789abcdef0123456789abcdef".to_string(),
            stake: "100".to_string(),
            odds: "150".to_string(),
            outcome: "win".to_string(),
            start: "2025-01-01".to_string(),
            end: "2025-02-01".to_string(),
            odds_date: "".to_string(),
        }
    }

    #[test]
    fn valid_input_builds_typed_request() {
        let valid = validate(&good_input()).unwrap();

        assert_eq!(valid.request.starting_capital, 1000.0);
        assert_eq!(valid.request.equity_symbol, "AAPL");
        assert_eq!(valid.request.equity_weight, 0.7);
        assert_eq!(valid.request.bet.league, "NFL");
        assert_eq!(valid.request.bet.stake, 100.0);
        assert_eq!(valid.request.bet.odds, Some(150.0));
        assert_eq!(valid.request.bet.outcome, Outcome::Win);
        assert_eq!(valid.window.start, "2025-01-01");
        assert_eq!(valid.window.end, "2025-02-01");
        assert!(valid.window.odds_date.is_none());
    }

    #[test]
    fn validation_is_deterministic() {
        let mut input = good_input();
        input.event_id = "NOT-HEX".to_string();
        input.stake = "-5".to_string();

        let first = validate(&input).unwrap_err();
        let second = validate(&input).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.messages().len(), 2);
    }

    #[test]
    fn event_id_rejects_uppercase_wrong_length_and_non_hex() {
        for bad in [
            "0123456789ABCDEF0123456789ABCDEF",
            "0123456789abcdef0123456789abcde",
            "0123456789abcdef0123456789abcdef0",
            "0123456789abcdeg0123456789abcdef",
            "",
        ] {
            let mut input = good_input();
            input.event_id = bad.to_string();
            let errors = validate(&input).unwrap_err();
            assert!(errors.event_id.is_some(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn equity_weight_bounds_are_inclusive() {
        for ok in ["0", "1", "0.5"] {
            let mut input = good_input();
            input.equity_weight = ok.to_string();
            assert!(validate(&input).is_ok(), "expected {:?} accepted", ok);
        }

        for bad in ["-0.01", "1.01"] {
            let mut input = good_input();
            input.equity_weight = bad.to_string();
            let errors = validate(&input).unwrap_err();
            assert!(errors.equity_weight.is_some(), "expected {:?} rejected", bad);
        }
    }

    #[test]
    fn empty_odds_normalizes_to_null() {
        let mut input = good_input();
        input.odds = "".to_string();
        let valid = validate(&input).unwrap();
        assert_eq!(valid.request.bet.odds, None);

        input.odds = "  ".to_string();
        let valid = validate(&input).unwrap();
        assert_eq!(valid.request.bet.odds, None);
    }

    #[test]
    fn odds_accepts_strict_numerics_only() {
        let mut input = good_input();
        input.odds = "150".to_string();
        assert_eq!(validate(&input).unwrap().request.bet.odds, Some(150.0));

        input.odds = "-110.5".to_string();
        assert_eq!(validate(&input).unwrap().request.bet.odds, Some(-110.5));

        for bad in ["abc", "1e3", "150x", "+150", "."] {
            input.odds = bad.to_string();
            let errors = validate(&input).unwrap_err();
            assert!(errors.odds.is_some(), "expected {:?} rejected", bad);
        }
    }

    #[test]
    fn end_before_start_attaches_error_to_end() {
        let mut input = good_input();
        input.start = "2025-02-01".to_string();
        input.end = "2025-01-01".to_string();

        let errors = validate(&input).unwrap_err();
        assert!(errors.start.is_none());
        assert_eq!(
            errors.end.as_deref(),
            Some("End date must be >= start date")
        );
    }

    #[test]
    fn equal_start_and_end_is_accepted() {
        let mut input = good_input();
        input.start = "2025-01-01".to_string();
        input.end = "2025-01-01".to_string();
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn missing_end_wins_over_cross_field_rule() {
        let mut input = good_input();
        input.end = "".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.end.as_deref(), Some("End date required"));
    }

    #[test]
    fn outcome_is_matched_exactly() {
        for bad in ["Win", "WIN", "lose", ""] {
            let mut input = good_input();
            input.outcome = bad.to_string();
            let errors = validate(&input).unwrap_err();
            assert!(errors.outcome.is_some(), "expected {:?} rejected", bad);
        }
    }

    #[test]
    fn symbol_and_league_are_trimmed() {
        let mut input = good_input();
        input.equity_symbol = "  AAPL  ".to_string();
        input.league = " NFL ".to_string();

        let valid = validate(&input).unwrap();
        assert_eq!(valid.request.equity_symbol, "AAPL");
        assert_eq!(valid.request.bet.league, "NFL");
    }

    #[test]
    fn provided_odds_date_is_carried_into_the_window() {
        let mut input = good_input();
        input.odds_date = "2025-01-15T13:00:00".to_string();

        let valid = validate(&input).unwrap();
        assert_eq!(valid.window.odds_date.as_deref(), Some("2025-01-15T13:00:00"));
    }

    #[test]
    fn all_violations_are_collected_at_once() {
        let input = ScenarioInput::default();
        let errors = validate(&input).unwrap_err();

        // Every required field reports, odds_date stays clean (optional)
        // and odds stays clean (empty is valid).
        assert!(errors.starting_capital.is_some());
        assert!(errors.equity_symbol.is_some());
        assert!(errors.equity_weight.is_some());
        assert!(errors.league.is_some());
        assert!(errors.event_id.is_some());
        assert!(errors.stake.is_some());
        assert!(errors.odds.is_none());
        assert!(errors.outcome.is_some());
        assert!(errors.start.is_some());
        assert!(errors.end.is_some());
        assert!(errors.odds_date.is_none());
    }
}
