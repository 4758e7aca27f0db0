// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Gifts",
    "Refunds",
    "Other Income",
];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Housing",
    "Transport",
    "Entertainment",
    "Health",
    "Education",
    "Shopping",
    "Personal Care",
    "Utilities",
    "Travel",
    "Insurance",
    "Debt",
    "Other Expenses",
];

#[derive(Debug, Error)]
#[error("Unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseKindError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

macro_rules! string_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    other => Err(ParseKindError {
                        kind: $label,
                        value: other.to_string(),
                        expected: concat!($($text, " "),+),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

string_enum!(TransactionKind, "transaction type", {
    Income => "income" | "ingreso",
    Expense => "expense" | "gasto",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// A transaction as entered, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub notes: String,
}

impl NewTransaction {
    pub fn into_record(self, id: String) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date: self.date,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[serde(alias = "semanal")]
    Weekly,
    #[default]
    #[serde(alias = "mensual")]
    Monthly,
    #[serde(alias = "anual")]
    Yearly,
}

string_enum!(BudgetPeriod, "budget period", {
    Weekly => "weekly" | "semanal",
    Monthly => "monthly" | "mensual",
    Yearly => "yearly" | "anual",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub limit: Decimal,
    /// Cached figure; only valid right after a recompute.
    #[serde(default)]
    pub spent: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub period: BudgetPeriod,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub name: String,
    pub limit: Decimal,
    pub category: String,
    pub period: BudgetPeriod,
    pub color: String,
}

impl NewBudget {
    pub fn into_record(self, id: String, spent: Decimal) -> Budget {
        Budget {
            id,
            name: self.name,
            limit: self.limit,
            spent,
            category: self.category,
            period: self.period,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "baja")]
    Low,
    #[default]
    #[serde(alias = "media")]
    Medium,
    #[serde(alias = "alta")]
    High,
}

string_enum!(Priority, "priority", {
    Low => "low" | "baja",
    Medium => "medium" | "media",
    High => "high" | "alta",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(with = "calendar_date")]
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub icon: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub category: String,
    pub priority: Priority,
    pub notes: String,
}

impl NewGoal {
    pub fn into_record(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name,
            icon: self.icon,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
            category: self.category,
            priority: self.priority,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Receipt,
    Bill,
    Statement,
    Tax,
    Insurance,
    Budget,
    Other,
}

string_enum!(DocumentKind, "document type", {
    Receipt => "receipt",
    Bill => "bill",
    Statement => "statement",
    Tax => "tax",
    Insurance => "insurance",
    Budget => "budget",
    Other => "other",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub date: NaiveDate,
    pub size: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldingKind {
    #[default]
    Stock,
    Crypto,
}

string_enum!(HoldingKind, "holding kind", {
    Stock => "stock" | "stocks",
    Crypto => "crypto",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    /// Absent on holdings from the per-kind legacy keys; set from the key.
    #[serde(default)]
    pub kind: HoldingKind,
    pub name: String,
    pub symbol: String,
    /// `shares` for legacy stocks, `amount` for legacy crypto.
    #[serde(alias = "shares", alias = "amount")]
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
    /// Percent change of the current price against the buy price.
    #[serde(default)]
    pub change: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHolding {
    pub kind: HoldingKind,
    pub name: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
}

/// Dates persist as `YYYY-MM-DD`; timestamps written by older clients keep their
/// calendar day.
pub(crate) mod calendar_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        let day = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}
