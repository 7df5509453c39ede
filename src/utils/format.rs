// ============================================================================
// FORMATO - Moneda (en-US)
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Formatea un importe como "$1,234.50" (dos decimales, separador de miles)
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_two_decimals_always() {
        assert_eq!(format_currency(dec("150")), "$150.00");
        assert_eq!(format_currency(dec("49.9")), "$49.90");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("10.005")), "$10.01");
        assert_eq!(format_currency(dec("10.004")), "$10.00");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(format_currency(dec("1234.5")), "$1,234.50");
        assert_eq!(format_currency(dec("1000000")), "$1,000,000.00");
        assert_eq!(format_currency(dec("999")), "$999.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(dec("-12.5")), "-$12.50");
    }
}
