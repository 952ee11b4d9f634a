//! Lenient parsing of free-text numeric inputs.
//!
//! Values typed by the user may use `,` as decimal separator and may carry
//! trailing garbage; only the leading numeric part counts, and anything
//! unparseable reads as zero.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses the leading decimal number of `raw`, or returns zero.
#[must_use]
pub fn parse_lenient_decimal(raw: &str) -> Decimal {
    let normalized = raw.trim().replacen(',', ".", 1);
    let prefix = numeric_prefix(&normalized, true);
    Decimal::from_str(prefix).unwrap_or(Decimal::ZERO)
}

/// Parses the leading integer of `raw` as a month count. Zero, negative
/// and unparseable inputs all read as zero.
#[must_use]
pub fn parse_lenient_months(raw: &str) -> u32 {
    let trimmed = raw.trim();
    numeric_prefix(trimmed, false)
        .parse::<i64>()
        .ok()
        .filter(|months| *months > 0)
        .map_or(0, |months| u32::try_from(months).unwrap_or(u32::MAX))
}

fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > end + 1 {
            end = frac_end;
        }
    }
    let has_digits = s[digits_start..end].bytes().any(|b| b.is_ascii_digit());
    if has_digits { &s[..end] } else { "" }
}
