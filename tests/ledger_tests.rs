// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensex::ledger;
use expensex::models::{Transaction, TxnType};
use rust_decimal::Decimal;

fn txn(merchant: &str, amount: &str, category: &str, kind: TxnType) -> Transaction {
    Transaction {
        id: None,
        merchant: merchant.to_string(),
        amount: amount.parse().unwrap(),
        date: "01 Aug 2026".to_string(),
        category: category.to_string(),
        kind,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        txn("Cafe", "120.50", "Food", TxnType::Debit),
        txn("Metro", "35", "Travel", TxnType::Debit),
        txn("Salary", "5000", "Income", TxnType::Credit),
        txn("Bazaar", "879.50", "Grocery", TxnType::Debit),
        txn("Refund", "99.99", "Income", TxnType::Credit),
        txn("Cafe again", "80", "Food", TxnType::Debit),
    ]
}

#[test]
fn balance_identity() {
    let txns = sample();
    let totals = ledger::totals(&txns);
    assert_eq!(totals.spent.to_string(), "1115.00");
    assert_eq!(totals.income.to_string(), "5099.99");

    let initial: Decimal = "5000".parse().unwrap();
    let balance = ledger::current_balance(initial, &totals);
    assert_eq!(balance, initial + totals.income - totals.spent);
    assert_eq!(balance.to_string(), "8984.99");
}

#[test]
fn category_groups_partition_total_spend() {
    let txns = sample();
    let totals = ledger::totals(&txns);
    let groups = ledger::spend_by_category(&txns);

    let group_sum: Decimal = groups.iter().map(|(_, a)| *a).sum();
    assert_eq!(group_sum, totals.spent);

    // credits never leak into the spend breakdown
    assert!(groups.iter().all(|(name, _)| name != "Income"));
    // each category appears once
    let mut names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), groups.len());
}

#[test]
fn categories_sorted_by_spend_descending() {
    let groups = ledger::spend_by_category(&sample());
    assert_eq!(groups[0].0, "Grocery");
    for pair in groups.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn empty_snapshot_balances_to_initial() {
    let totals = ledger::totals(&[]);
    assert_eq!(totals, ledger::Totals::default());
    let initial: Decimal = "5000".parse().unwrap();
    assert_eq!(ledger::current_balance(initial, &totals), initial);
    assert!(ledger::spend_by_category(&[]).is_empty());
}
