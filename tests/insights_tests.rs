// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::insights::{generate, InsightKind, Tone};
use pocketbook::models::{Budget, BudgetPeriod, Transaction, TransactionKind};
use rust_decimal::Decimal;

fn tx(description: &str, amount: i64, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id: description.to_string(),
        description: description.to_string(),
        amount: Decimal::from(amount),
        kind,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        notes: String::new(),
    }
}

fn budget(name: &str, limit: i64) -> Budget {
    Budget {
        id: name.to_string(),
        name: name.to_string(),
        limit: Decimal::from(limit),
        // Stale on purpose; insights recompute spend
        spent: Decimal::from(9999),
        category: "Other Expenses".to_string(),
        period: BudgetPeriod::Monthly,
        color: "blue".to_string(),
    }
}

fn kinds(txs: &[Transaction], budgets: &[Budget]) -> Vec<InsightKind> {
    generate(txs, budgets).into_iter().map(|i| i.kind).collect()
}

#[test]
fn empty_data_asks_to_get_started() {
    let insights = generate(&[], &[]);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::GetStarted);
    assert_eq!(insights[0].tone, Tone::Info);
}

#[test]
fn balanced_ledger_falls_back_to_keep_tracking() {
    let txs = vec![
        tx("Salary", 100, TransactionKind::Income, "Salary"),
        tx("Rent", 100, TransactionKind::Expense, "Housing"),
    ];
    assert_eq!(kinds(&txs, &[]), vec![InsightKind::KeepTracking]);
}

#[test]
fn income_above_expense_is_positive() {
    let txs = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Rent", 300, TransactionKind::Expense, "Housing"),
    ];
    let insights = generate(&txs, &[]);
    assert_eq!(insights[0].kind, InsightKind::IncomeAboveExpense);
    assert_eq!(insights[0].tone, Tone::Positive);
}

#[test]
fn expense_above_income_is_negative() {
    let txs = vec![
        tx("Salary", 100, TransactionKind::Income, "Salary"),
        tx("Rent", 300, TransactionKind::Expense, "Housing"),
    ];
    let insights = generate(&txs, &[]);
    assert_eq!(insights[0].kind, InsightKind::ExpenseAboveIncome);
    assert_eq!(insights[0].tone, Tone::Negative);
}

#[test]
fn over_budget_suppresses_near_limit_and_good_control() {
    let txs = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Cine", 120, TransactionKind::Expense, "Entertainment"),
        tx("Luz", 85, TransactionKind::Expense, "Utilities"),
    ];
    let budgets = vec![budget("Cine", 100), budget("Luz", 100)];
    assert_eq!(
        kinds(&txs, &budgets),
        vec![
            InsightKind::IncomeAboveExpense,
            InsightKind::OverBudget {
                budgets: vec!["Cine".to_string()]
            },
        ]
    );
}

#[test]
fn near_limit_when_nothing_is_over() {
    let txs = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Luz", 80, TransactionKind::Expense, "Utilities"),
    ];
    let insights = generate(&txs, &[budget("Luz", 100)]);
    assert_eq!(
        insights[1].kind,
        InsightKind::NearLimit {
            budgets: vec!["Luz".to_string()]
        }
    );
    assert_eq!(insights[1].tone, Tone::Warning);
    // 80% average is not good control
    assert_eq!(insights.len(), 2);
}

#[test]
fn dominant_category_needs_more_than_three_transactions() {
    let three = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Rent", 600, TransactionKind::Expense, "Housing"),
        tx("Bus", 100, TransactionKind::Expense, "Transport"),
    ];
    assert!(!kinds(&three, &[])
        .iter()
        .any(|k| matches!(k, InsightKind::DominantCategory { .. })));

    let mut four = three.clone();
    four.push(tx("Snacks", 100, TransactionKind::Expense, "Food"));
    let found = kinds(&four, &[]);
    assert!(found.contains(&InsightKind::DominantCategory {
        category: "Housing".to_string(),
        percent: 75,
    }));
}

#[test]
fn exactly_half_is_not_dominant() {
    let txs = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Rent", 100, TransactionKind::Expense, "Housing"),
        tx("Bus", 50, TransactionKind::Expense, "Transport"),
        tx("Snacks", 50, TransactionKind::Expense, "Food"),
    ];
    assert!(!kinds(&txs, &[])
        .iter()
        .any(|k| matches!(k, InsightKind::DominantCategory { .. })));
}

#[test]
fn low_average_usage_is_good_control() {
    let txs = vec![
        tx("Salary", 1000, TransactionKind::Income, "Salary"),
        tx("Luz", 30, TransactionKind::Expense, "Utilities"),
        tx("Agua", 50, TransactionKind::Expense, "Utilities"),
    ];
    let budgets = vec![budget("Luz", 100), budget("Agua", 100)];
    let insights = generate(&txs, &budgets);
    assert_eq!(
        insights.last().unwrap().kind,
        InsightKind::GoodControl { average_percent: 40 }
    );
    assert_eq!(insights.last().unwrap().tone, Tone::Positive);
}

#[test]
fn zero_limit_budget_skips_good_control() {
    let txs = vec![tx("Salary", 1000, TransactionKind::Income, "Salary")];
    let budgets = vec![budget("Luz", 100), budget("Nada", 0)];
    assert_eq!(kinds(&txs, &budgets), vec![InsightKind::IncomeAboveExpense]);
}

#[test]
fn tiny_limit_with_huge_spend_is_over_budget() {
    let mut luz = tx("Luz", 0, TransactionKind::Expense, "Utilities");
    luz.amount = "10000000000000000000000".parse().unwrap();
    let mut tiny = budget("Luz", 1);
    tiny.limit = "0.0000001".parse().unwrap();
    assert_eq!(
        kinds(&[luz], &[tiny]),
        vec![
            InsightKind::ExpenseAboveIncome,
            InsightKind::OverBudget {
                budgets: vec!["Luz".to_string()]
            },
        ]
    );
}

#[test]
fn insights_serialize_with_kind_tag() {
    let insights = generate(&[], &[]);
    let value = serde_json::to_value(&insights).unwrap();
    assert_eq!(value[0]["kind"], "get_started");
    assert_eq!(value[0]["tone"], "info");
    assert!(value[0]["text"].as_str().unwrap().contains("transactions"));
}
