pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

/// Format a currency amount with two decimals and the sign ahead of the symbol.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_breakeven(month: Option<u32>) -> String {
    match month {
        Some(m) => format!("month {m}"),
        None => "not within horizon".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_sign_placement() {
        assert_eq!(format_currency(486.0), "$486.00");
        assert_eq!(format_currency(-10_000.0), "-$10000.00");
        assert_eq!(format_currency(0.126), "$0.13");
    }

    #[test]
    fn test_breakeven_text() {
        assert_eq!(format_breakeven(Some(1)), "month 1");
        assert_eq!(format_breakeven(None), "not within horizon");
    }
}
