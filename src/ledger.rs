// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard aggregation over a full ledger snapshot.
//!
//! Everything here is recomputed from scratch on each refresh; the
//! snapshot is small and refreshes are user-triggered.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Transaction, TxnType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub spent: Decimal,
    pub income: Decimal,
}

pub fn totals(txns: &[Transaction]) -> Totals {
    let mut t = Totals::default();
    for txn in txns {
        match txn.kind {
            TxnType::Debit => t.spent += txn.amount,
            TxnType::Credit => t.income += txn.amount,
        }
    }
    t
}

/// current balance = initial balance + Σ Credit − Σ Debit.
pub fn current_balance(initial: Decimal, totals: &Totals) -> Decimal {
    initial + totals.income - totals.spent
}

/// Debit spend grouped by category label. The groups partition the
/// Debit set, so their sum equals `Totals::spent` exactly.
pub fn spend_by_category(txns: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for txn in txns.iter().filter(|t| t.kind == TxnType::Debit) {
        *map.entry(txn.category.clone()).or_default() += txn.amount;
    }
    let mut out: Vec<(String, Decimal)> = map.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
