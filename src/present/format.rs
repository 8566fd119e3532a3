/// USD amount with two decimals and thousands separators, e.g. `$1,175.00`,
/// `-$25.50`. Sign is forwarded, never reinterpreted.
pub fn fmt_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.abs()))
}

/// Two-decimal percentage with an explicit suffix, e.g. `17.50%`.
pub fn fmt_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Plain two-decimal number, used for resolved odds.
pub fn fmt_number(value: f64) -> String {
    format!("{:.2}", value)
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, dec_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d),
        None => (formatted.as_str(), "00"),
    };

    let grouped: String = int_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    format!("{}.{}", grouped, dec_part)
}
