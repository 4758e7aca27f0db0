// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregations over a snapshot of the ledger.

use crate::ledger::Totals;
use crate::models::Transaction;
use crate::utils::clamped_percent;
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

pub const OTHER_LABEL: &str = "Other";

/// More categories than this and the tail is folded into [`OTHER_LABEL`].
const MAX_SLICES: usize = 7;
const NAMED_SLICES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Decimal,
    /// Share of total expense, in percent.
    pub percent: Decimal,
}

impl CategoryTotal {
    fn new(name: impl Into<String>, amount: Decimal, total: Decimal) -> Self {
        let percent = clamped_percent(amount, total);
        Self {
            name: name.into(),
            amount,
            percent,
        }
    }
}

/// Expense sums per category, in the order categories first appear.
fn group_expenses(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        match groups.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, sum)) => *sum += t.amount,
            None => groups.push((t.category.clone(), t.amount)),
        }
    }
    groups
}

/// Every expense category with its share, unsorted.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let groups = group_expenses(transactions);
    let total: Decimal = groups.iter().map(|(_, s)| *s).sum();
    groups
        .into_iter()
        .map(|(name, amount)| CategoryTotal::new(name, amount, total))
        .collect()
}

/// Expense categories largest first, capped for charting: beyond seven
/// categories only the top six are kept and the rest summed into "Other".
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut slices = expenses_by_category(transactions);
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    if slices.len() > MAX_SLICES {
        let total: Decimal = slices.iter().map(|c| c.amount).sum();
        let rest: Decimal = slices.split_off(NAMED_SLICES).iter().map(|c| c.amount).sum();
        slices.push(CategoryTotal::new(OTHER_LABEL, rest, total));
    }
    slices
}

/// Largest expense category. On a tie the category seen later wins.
pub fn top_expense_category(transactions: &[Transaction]) -> Option<(String, Decimal)> {
    group_expenses(transactions)
        .into_iter()
        .reduce(|best, cur| if best.1 > cur.1 { best } else { cur })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    TwelveMonths,
}

impl Window {
    pub fn months(&self) -> u32 {
        match self {
            Window::OneMonth => 1,
            Window::ThreeMonths => 3,
            Window::SixMonths => 6,
            Window::TwelveMonths => 12,
        }
    }

    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            1 => Some(Window::OneMonth),
            3 => Some(Window::ThreeMonths),
            6 => Some(Window::SixMonths),
            12 => Some(Window::TwelveMonths),
            _ => None,
        }
    }
}

impl FromStr for Window {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let months = match normalized.as_str() {
            "1y" => 12,
            other => other.trim_end_matches('m').parse::<u32>().unwrap_or(0),
        };
        Window::from_months(months)
            .ok_or_else(|| anyhow::anyhow!("Invalid window '{}', expected 1|3|6|12 months", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Income, expense and savings per calendar month over `window` ending at
/// `end`. The window starts `window` months before `end`, so both the start
/// and end months get a bucket even when they hold no transactions.
pub fn monthly_series(transactions: &[Transaction], window: Window, end: NaiveDate) -> Vec<MonthBucket> {
    let start = end
        .checked_sub_months(Months::new(window.months()))
        .unwrap_or(NaiveDate::MIN);

    let mut buckets = Vec::new();
    let mut cursor = month_start(start);
    while cursor <= end {
        buckets.push(MonthBucket {
            month: month_label(cursor),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            savings: Decimal::ZERO,
        });
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    for t in transactions.iter().filter(|t| t.date >= start && t.date <= end) {
        let label = month_label(t.date);
        if let Some(bucket) = buckets.iter_mut().find(|b| b.month == label) {
            if t.is_income() {
                bucket.income += t.amount;
            } else {
                bucket.expense += t.amount;
            }
        }
    }
    for bucket in &mut buckets {
        bucket.savings = bucket.income - bucket.expense;
    }
    buckets
}

/// Net balance as a percent of income; zero without income.
pub fn savings_rate(totals: &Totals) -> Decimal {
    clamped_percent(totals.net, totals.income)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub savings_rate: Decimal,
    pub transactions: usize,
}

pub fn summary(transactions: &[Transaction]) -> Summary {
    let totals = Totals::of(transactions);
    Summary {
        income: totals.income,
        expense: totals.expense,
        net: totals.net,
        savings_rate: savings_rate(&totals),
        transactions: transactions.len(),
    }
}
