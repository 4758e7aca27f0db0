// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod cli;
pub mod db;
pub mod documents;
pub mod error;
pub mod goals;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod portfolio;
pub mod reports;
pub mod settings;
pub mod store;
pub mod utils;
pub mod commands;
