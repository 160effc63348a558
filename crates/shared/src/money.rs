//! Single conversion point for the rupee display format.
//!
//! Amounts render as the `₹` symbol immediately followed by a two-decimal
//! number. Parsing strips one optional `₹` prefix and reads the remainder as
//! a number; anything else yields `f64::NAN`, which callers let flow into
//! displayed totals unvalidated.

pub const INR_SYMBOL: char = '₹';

pub fn format_inr(amount: f64) -> String {
    format!("{INR_SYMBOL}{amount:.2}")
}

/// Parse a currency-prefixed price label such as `₹120.00`.
///
/// Returns `f64::NAN` when the text does not parse as a number after the
/// optional single `₹` prefix is stripped.
pub fn parse_inr(text: &str) -> f64 {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(INR_SYMBOL).unwrap_or(trimmed);
    digits.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals_with_symbol() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(200.5), "₹200.50");
        assert_eq!(format_inr(120.0), "₹120.00");
    }

    #[test]
    fn parses_prefixed_and_bare_amounts() {
        assert_eq!(parse_inr("₹120.00"), 120.0);
        assert_eq!(parse_inr("80.50"), 80.5);
        assert_eq!(parse_inr(" ₹40.00 "), 40.0);
    }

    #[test]
    fn malformed_price_text_yields_nan() {
        assert!(parse_inr("free").is_nan());
        assert!(parse_inr("₹").is_nan());
        assert!(parse_inr("").is_nan());
    }

    #[test]
    fn nan_propagates_into_rendered_total() {
        assert_eq!(format_inr(f64::NAN), "₹NaN");
    }
}
