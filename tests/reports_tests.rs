// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::models::{Transaction, TransactionKind};
use pocketbook::reports::{
    category_breakdown, expenses_by_category, monthly_series, summary, top_expense_category,
    Window, OTHER_LABEL,
};
use rust_decimal::Decimal;

fn tx(id: &str, date: (i32, u32, u32), amount: i64, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: id.to_string(),
        amount: Decimal::from(amount),
        kind,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        notes: String::new(),
    }
}

fn expense(id: &str, amount: i64, category: &str) -> Transaction {
    tx(id, (2025, 3, 1), amount, TransactionKind::Expense, category)
}

#[test]
fn breakdown_folds_tail_into_other_beyond_seven_categories() {
    let txs: Vec<Transaction> = [
        ("Housing", 800),
        ("Food", 400),
        ("Transport", 300),
        ("Health", 200),
        ("Education", 150),
        ("Shopping", 100),
        ("Travel", 60),
        ("Debt", 40),
    ]
    .iter()
    .enumerate()
    .map(|(i, (cat, amt))| expense(&format!("t{}", i), *amt, cat))
    .collect();

    let slices = category_breakdown(&txs);
    assert_eq!(slices.len(), 7);
    assert_eq!(slices[0].name, "Housing");
    assert_eq!(slices[5].name, "Shopping");
    assert_eq!(slices[6].name, OTHER_LABEL);
    assert_eq!(slices[6].amount, Decimal::from(100));
    let total: Decimal = slices.iter().map(|s| s.amount).sum();
    assert_eq!(total, Decimal::from(2050));
}

#[test]
fn seven_categories_are_kept_whole() {
    let txs: Vec<Transaction> = (1..=7)
        .map(|i| expense(&format!("t{}", i), i * 10, &format!("C{}", i)))
        .collect();
    let slices = category_breakdown(&txs);
    assert_eq!(slices.len(), 7);
    assert!(slices.iter().all(|s| s.name != OTHER_LABEL));
    assert_eq!(slices[0].name, "C7");
}

#[test]
fn breakdown_ignores_income_and_sums_per_category() {
    let txs = vec![
        expense("a", 30, "Food"),
        tx("b", (2025, 3, 2), 1000, TransactionKind::Income, "Salary"),
        expense("c", 20, "Food"),
        expense("d", 50, "Transport"),
    ];
    let all = expenses_by_category(&txs);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Food");
    assert_eq!(all[0].amount, Decimal::from(50));
    assert_eq!(all[0].percent, Decimal::from(50));
    assert!(expenses_by_category(&[]).is_empty());
}

#[test]
fn top_category_tie_goes_to_later_category() {
    let txs = vec![expense("a", 40, "Food"), expense("b", 40, "Transport")];
    let (name, amount) = top_expense_category(&txs).unwrap();
    assert_eq!(name, "Transport");
    assert_eq!(amount, Decimal::from(40));
    assert!(top_expense_category(&[]).is_none());
}

#[test]
fn one_month_window_spans_two_calendar_months() {
    let end = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let txs = vec![
        tx("early", (2025, 2, 10), 99, TransactionKind::Expense, "Food"),
        tx("feb", (2025, 2, 20), 40, TransactionKind::Expense, "Food"),
        tx("pay", (2025, 3, 1), 500, TransactionKind::Income, "Salary"),
        tx("mar", (2025, 3, 14), 60, TransactionKind::Expense, "Food"),
        tx("future", (2025, 3, 20), 70, TransactionKind::Expense, "Food"),
    ];

    let series = monthly_series(&txs, Window::OneMonth, end);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].month, "2025-02");
    assert_eq!(series[0].expense, Decimal::from(40));
    assert_eq!(series[0].savings, Decimal::from(-40));
    assert_eq!(series[1].month, "2025-03");
    assert_eq!(series[1].income, Decimal::from(500));
    assert_eq!(series[1].expense, Decimal::from(60));
    assert_eq!(series[1].savings, Decimal::from(440));
}

#[test]
fn six_month_window_crosses_year_boundary() {
    let end = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    let txs = vec![
        tx("dec", (2024, 12, 5), 100, TransactionKind::Income, "Salary"),
        tx("dec-prev", (2023, 12, 5), 999, TransactionKind::Income, "Salary"),
    ];
    let series = monthly_series(&txs, Window::default(), end);
    let months: Vec<&str> = series.iter().map(|b| b.month.as_str()).collect();
    assert_eq!(
        months,
        ["2024-08", "2024-09", "2024-10", "2024-11", "2024-12", "2025-01", "2025-02"]
    );
    assert_eq!(series[4].income, Decimal::from(100));
    let income: Decimal = series.iter().map(|b| b.income).sum();
    assert_eq!(income, Decimal::from(100));
}

#[test]
fn summary_reports_savings_rate() {
    let txs = vec![
        tx("pay", (2025, 3, 1), 1000, TransactionKind::Income, "Salary"),
        expense("rent", 250, "Housing"),
    ];
    let s = summary(&txs);
    assert_eq!(s.net, Decimal::from(750));
    assert_eq!(s.savings_rate, Decimal::from(75));
    assert_eq!(s.transactions, 2);

    let empty = summary(&[]);
    assert_eq!(empty.savings_rate, Decimal::ZERO);
}
