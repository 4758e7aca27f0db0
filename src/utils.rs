// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn required_arg<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("Missing required argument --{}", name))
}

/// Trimmed value of an optional argument; blank counts as absent.
pub fn optional_arg<'a>(m: &'a ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, d.round_dp(2))
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

/// `part` as a percent of `whole`. `None` for a zero `whole` or when the
/// result does not fit in a `Decimal`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

/// `percent_of` clamped to the `Decimal` range, zero for a zero `whole`.
pub fn clamped_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    percent_of(part, whole).unwrap_or(
        if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    )
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_two_decimals_with_symbol() {
        let d = Decimal::from_str_exact("1234.5").unwrap();
        assert_eq!(fmt_money(&d, "₡"), "₡1234.50");
        assert_eq!(fmt_money(&Decimal::from(-3), "$"), "$-3.00");
    }

    #[test]
    fn parse_inputs_trim_whitespace() {
        assert_eq!(
            parse_date(" 2025-07-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(parse_decimal(" 25.00 ").unwrap(), Decimal::from_str_exact("25.00").unwrap());
        assert!(parse_date("07/01/2025").is_err());
    }

    #[test]
    fn percents_survive_tiny_denominators() {
        let tiny = Decimal::from_str_exact("0.0000001").unwrap();
        let huge = Decimal::from_str_exact("10000000000000000000000").unwrap();
        assert_eq!(percent_of(Decimal::from(30), Decimal::from(120)), Some(Decimal::from(25)));
        assert_eq!(percent_of(Decimal::ONE, Decimal::ZERO), None);
        assert_eq!(percent_of(huge, tiny), None);
        assert_eq!(clamped_percent(huge, tiny), Decimal::MAX);
        assert_eq!(clamped_percent(-huge, tiny), Decimal::MIN);
        assert_eq!(clamped_percent(Decimal::ONE, Decimal::ZERO), Decimal::ZERO);
    }
}
