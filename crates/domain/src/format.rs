//! Display formatting for monetary amounts, percentages and month labels.
//!
//! Amounts follow the Brazilian convention (`R$ 1.234,56`); percentages keep
//! the dot separator the service uses (`12.34%`).

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "R$";

/// Formats an amount as Brazilian reais with two decimals.
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_cents(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let abs = rounded.abs();
    let units = abs.trunc();
    let cents = ((abs - units) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u64()
        .unwrap_or(0);

    format!(
        "{sign}{CURRENCY_SYMBOL} {},{cents:02}",
        group_thousands(&units.to_string())
    )
}

/// Formats a percentage value with two decimals and a trailing `%`.
#[must_use]
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", round_cents(value))
}

/// Formats a calendar month as `MM/YY`.
#[must_use]
pub fn format_month_label(date: NaiveDate) -> String {
    date.format("%m/%y").to_string()
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_currency(dec!(1234567.8)), "R$ 1.234.567,80");
        assert_eq!(format_currency(dec!(999)), "R$ 999,00");
    }

    #[test]
    fn test_format_currency_zero_and_rounding() {
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_currency(dec!(0.005)), "R$ 0,01");
        assert_eq!(format_currency(dec!(10.994)), "R$ 10,99");
        assert_eq!(format_currency(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1500.5)), "-R$ 1.500,50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(12.3)), "12.30%");
        assert_eq!(format_percentage(dec!(-0.456)), "-0.46%");
        assert_eq!(format_percentage(dec!(7)), "7.00%");
    }

    #[test]
    fn test_format_month_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_month_label(date), "03/24");
    }
}
