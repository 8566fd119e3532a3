use crate::present::format::{fmt_currency, fmt_number, fmt_percent};
use crate::scenario::types::{ComparisonResult, HistoryEntry, OddsMeta};
use crate::scenario::validate::FieldErrors;

/// Label for the odds line: the literal snapshot timestamp when historical
/// odds were used, a fixed string otherwise.
pub fn snapshot_label(meta: &OddsMeta) -> String {
    match &meta.snapshot_timestamp {
        Some(ts) => format!("Snapshot: {}", ts),
        None => "Live / explicit odds".to_string(),
    }
}

/// Render one successful comparison as plain text. Values are echoed from
/// the response, only reformatted.
pub fn render_result(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str("Result\n");
    out.push_str(&format!(
        "  Total Final: {}  ROI {}\n",
        fmt_currency(result.combined_final),
        fmt_percent(result.roi_pct)
    ));
    out.push_str(&format!(
        "  Equity {}: Alloc {}  PnL {}  Final {}\n",
        result.equity.symbol,
        fmt_currency(result.equity.allocated),
        fmt_currency(result.equity.pnl),
        fmt_currency(result.equity.final_value)
    ));
    out.push_str(&format!(
        "  Bet {}: Alloc {}  PnL {}  Final {}\n",
        result.bet.event,
        fmt_currency(result.bet.allocated),
        fmt_currency(result.bet.pnl),
        fmt_currency(result.bet.final_value)
    ));

    out.push_str(&format!(
        "  Odds Used: {} ({})",
        fmt_number(result.odds_meta.resolved_odds),
        snapshot_label(&result.odds_meta)
    ));
    if result.odds_meta.fallback_used {
        out.push_str(" [FALLBACK]");
    }
    out.push('\n');

    out
}

/// Per-field messages plus the summary line the form shows.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::from("Fix validation errors.\n");
    for (field, message) in errors.messages() {
        out.push_str(&format!("  {}: {}\n", field, message));
    }
    out
}

/// Past comparisons in the order the server returned them.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    let mut out = String::from("Recent Comparisons\n");
    for entry in entries {
        out.push_str(&format!(
            "  {}  {} / {}  Combined {}  ROI {}\n",
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.payload.equity_symbol,
            fmt_currency(entry.payload.starting_capital),
            fmt_currency(entry.result.combined_final),
            fmt_percent(entry.result.roi_pct)
        ));
    }
    out
}
