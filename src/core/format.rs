/// Placeholder for missing optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Insert `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount stored in millions as whole US dollars, e.g. `1.0` -> `$1,000,000`.
pub fn format_currency(amount_million: f64) -> String {
    let dollars = (amount_million * 1_000_000.0).round();
    let grouped = group_thousands(dollars.abs() as u64);
    if dollars < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format an optional cost, falling back to the placeholder.
pub fn format_cost(cost_million: Option<f64>) -> String {
    cost_million
        .map(format_currency)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Billions with one decimal, e.g. `$2.0B`.
pub fn format_billions(value: f64) -> String {
    format!("${value:.1}B")
}

pub fn date_or_na(date: Option<&str>) -> &str {
    match date {
        Some(date) if !date.is_empty() => date,
        _ => NOT_AVAILABLE,
    }
}

/// CSS-style badge class for a status, e.g. `status-completed`.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(1.0), "$1,000,000");
        assert_eq!(format_currency(0.0000004), "$0");
        assert_eq!(format_currency(12.5), "$12,500,000");
        assert_eq!(format_currency(-2.0), "-$2,000,000");
    }
}
