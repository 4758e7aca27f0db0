// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ensure_positive, Result};
use crate::models::{Goal, NewGoal};
use crate::store::{new_id, Collection, CollectionKey, Record, RecordStore};
use crate::utils::clamped_percent;
use chrono::NaiveDate;
use rust_decimal::Decimal;

impl Record for Goal {
    const KEY: CollectionKey = CollectionKey::Goals;
    const LABEL: &'static str = "goal";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Goal {
    /// Share of the target already saved, in percent. Zero for a zero target.
    pub fn progress_percent(&self) -> Decimal {
        clamped_percent(self.current_amount, self.target_amount)
    }

    pub fn remaining(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days from `today` until the deadline; negative once it has passed.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

pub struct GoalTracker<'a, S: RecordStore> {
    records: Collection<'a, S, Goal>,
}

impl<'a, S: RecordStore> GoalTracker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            records: Collection::new(store),
        }
    }

    pub fn list_all(&self) -> Vec<Goal> {
        self.records.list()
    }

    /// Goals in `category`; `"all"` selects every goal.
    pub fn by_category(&self, category: &str) -> Vec<Goal> {
        let goals = self.list_all();
        if category.eq_ignore_ascii_case("all") {
            return goals;
        }
        goals.into_iter().filter(|g| g.category == category).collect()
    }

    pub fn find(&self, id: &str) -> Option<Goal> {
        self.records.find(id)
    }

    pub fn add(&self, data: NewGoal) -> Result<Goal> {
        ensure_positive("target amount", data.target_amount)?;
        let goal = self.records.append(data.into_record(new_id()))?;
        tracing::info!(id = %goal.id, name = %goal.name, "goal added");
        Ok(goal)
    }

    /// Full replace; may set `current_amount` to anything.
    pub fn update(&self, record: Goal) -> Result<Goal> {
        ensure_positive("target amount", record.target_amount)?;
        let goal = self.records.replace(record)?;
        tracing::info!(id = %goal.id, "goal updated");
        Ok(goal)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        if self.records.remove(id)? {
            tracing::info!(id, "goal removed");
        }
        Ok(())
    }

    pub fn add_funds(&self, id: &str, amount: Decimal) -> Result<Goal> {
        ensure_positive("contribution", amount)?;
        let goal = self.records.modify(id, |g| {
            g.current_amount += amount;
            Ok(())
        })?;
        tracing::info!(id, %amount, current = %goal.current_amount, "goal funded");
        Ok(goal)
    }
}
