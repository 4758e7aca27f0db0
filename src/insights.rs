// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based observations about the current ledger and budgets.
//!
//! Rules run in a fixed order and each contributes at most one insight. The
//! over-budget and near-limit checks are the only pair that exclude each
//! other.

use crate::budgets::{spent_by_name, BudgetStatus};
use crate::ledger::Totals;
use crate::models::{Budget, Transaction};
use crate::reports::top_expense_category;
use crate::utils::clamped_percent;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const DOMINANT_CATEGORY_PERCENT: i64 = 50;
const GOOD_CONTROL_PERCENT: i64 = 70;
/// The category rule needs more than this many transactions.
const MIN_TRANSACTIONS_FOR_CATEGORY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightKind {
    IncomeAboveExpense,
    ExpenseAboveIncome,
    OverBudget { budgets: Vec<String> },
    NearLimit { budgets: Vec<String> },
    DominantCategory { category: String, percent: i64 },
    GoodControl { average_percent: i64 },
    GetStarted,
    KeepTracking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    #[serde(flatten)]
    pub kind: InsightKind,
    pub tone: Tone,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind) -> Self {
        let tone = match &kind {
            InsightKind::IncomeAboveExpense | InsightKind::GoodControl { .. } => Tone::Positive,
            InsightKind::ExpenseAboveIncome | InsightKind::OverBudget { .. } => Tone::Negative,
            InsightKind::NearLimit { .. } => Tone::Warning,
            InsightKind::DominantCategory { .. }
            | InsightKind::GetStarted
            | InsightKind::KeepTracking => Tone::Info,
        };
        let text = describe(&kind);
        Insight { kind, tone, text }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn describe(kind: &InsightKind) -> String {
    match kind {
        InsightKind::IncomeAboveExpense => {
            "Your income is higher than your expenses. Nice work keeping a positive balance!".into()
        }
        InsightKind::ExpenseAboveIncome => {
            "Your expenses exceed your income. Consider cutting back to balance your budget.".into()
        }
        InsightKind::OverBudget { budgets } => format!(
            "You have {} budget{} over the limit: {}.",
            budgets.len(),
            plural(budgets.len()),
            budgets.join(", ")
        ),
        InsightKind::NearLimit { budgets } => format!(
            "You have {} budget{} close to the limit ({}).",
            budgets.len(),
            plural(budgets.len()),
            budgets.join(", ")
        ),
        InsightKind::DominantCategory { category, percent } => format!(
            "{}% of your spending goes to {}. Consider diversifying your expenses.",
            percent, category
        ),
        InsightKind::GoodControl { average_percent } => format!(
            "On average you are using {}% of your budgets. Excellent spending control!",
            average_percent
        ),
        InsightKind::GetStarted => {
            "Start adding transactions to get personalised insights about your finances.".into()
        }
        InsightKind::KeepTracking => {
            "Keep recording your transactions to unlock more personalised insights.".into()
        }
    }
}

/// Rounds half away from zero, matching how percentages are shown.
fn round_percent(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Evaluates every rule against `transactions` and `budgets`. Budget spend is
/// recomputed by name here; stored `spent` values are ignored.
pub fn generate(transactions: &[Transaction], budgets: &[Budget]) -> Vec<Insight> {
    let mut insights = Vec::new();
    let totals = Totals::of(transactions);

    if !transactions.is_empty() {
        if totals.income > totals.expense {
            insights.push(Insight::new(InsightKind::IncomeAboveExpense));
        } else if totals.expense > totals.income {
            insights.push(Insight::new(InsightKind::ExpenseAboveIncome));
        }
    }

    let live: Vec<BudgetStatus> = budgets
        .iter()
        .map(|b| {
            let mut b = b.clone();
            b.spent = spent_by_name(&b.name, transactions);
            BudgetStatus::of(&b)
        })
        .collect();
    let over: Vec<String> = live
        .iter()
        .filter(|s| s.over_budget)
        .map(|s| s.name.clone())
        .collect();
    let near: Vec<String> = live
        .iter()
        .filter(|s| s.near_limit())
        .map(|s| s.name.clone())
        .collect();
    if !over.is_empty() {
        insights.push(Insight::new(InsightKind::OverBudget { budgets: over.clone() }));
    } else if !near.is_empty() {
        insights.push(Insight::new(InsightKind::NearLimit { budgets: near }));
    }

    if transactions.len() > MIN_TRANSACTIONS_FOR_CATEGORY && !totals.expense.is_zero() {
        if let Some((category, amount)) = top_expense_category(transactions) {
            let share = clamped_percent(amount, totals.expense.abs());
            if share > Decimal::from(DOMINANT_CATEGORY_PERCENT) {
                insights.push(Insight::new(InsightKind::DominantCategory {
                    category,
                    percent: round_percent(share),
                }));
            }
        }
    }

    if !live.is_empty() && over.is_empty() {
        // Without a utilization for every budget the average is undefined.
        let average = live
            .iter()
            .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.utilization?))
            .and_then(|total| total.checked_div(Decimal::from(live.len())));
        if let Some(average) = average {
            if average < Decimal::from(GOOD_CONTROL_PERCENT) {
                insights.push(Insight::new(InsightKind::GoodControl {
                    average_percent: round_percent(average),
                }));
            }
        }
    }

    if transactions.is_empty() {
        insights.push(Insight::new(InsightKind::GetStarted));
    }

    if insights.is_empty() {
        insights.push(Insight::new(InsightKind::KeepTracking));
    }
    insights
}
