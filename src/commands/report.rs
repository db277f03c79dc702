// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::api::LedgerClient;
use crate::ledger;
use crate::store;
use crate::utils::{fmt_money, pretty_table, share_bar};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let client = LedgerClient::from_store(conn)?;
    match m.subcommand() {
        Some(("summary", _)) => summary(conn, &client)?,
        Some(("categories", _)) => categories(&client)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, client: &LedgerClient) -> Result<()> {
    let txns = client.expenses()?;
    let totals = ledger::totals(&txns);
    let initial = store::get_initial_balance(conn)?;
    let rows = vec![
        vec!["Total Expense".to_string(), fmt_money(&totals.spent)],
        vec!["Total Income".to_string(), fmt_money(&totals.income)],
        vec!["Initial Balance".to_string(), fmt_money(&initial)],
        vec![
            "Current Balance".to_string(),
            fmt_money(&ledger::current_balance(initial, &totals)),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount"], rows));
    Ok(())
}

/// The pie chart, flattened: per-category debit totals with share bars.
fn categories(client: &LedgerClient) -> Result<()> {
    let txns = client.expenses()?;
    let groups = ledger::spend_by_category(&txns);
    let total = ledger::totals(&txns).spent;
    if total.is_zero() {
        println!("Nothing spent yet.");
        return Ok(());
    }
    let mut rows = Vec::new();
    for (name, amount) in &groups {
        let share = amount / total;
        rows.push(vec![
            name.clone(),
            fmt_money(amount),
            format!("{:.1}%", share * Decimal::from(100)),
            share_bar(share, 20),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", ""], rows)
    );
    println!("Total spent: {}", fmt_money(&total));
    Ok(())
}
