// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::LedgerClient;
use crate::ledger;
use crate::models::{Transaction, TxnType};
use crate::store;
use crate::utils::{current_date, fmt_money, parse_amount_or_zero, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let client = LedgerClient::from_store(conn)?;
    match m.subcommand() {
        Some(("list", _)) => {
            let txns = client.expenses()?;
            render_snapshot(conn, &txns)?;
        }
        Some(("add", sub)) => {
            let kind = match sub.get_one::<String>("type").unwrap().as_str() {
                "Credit" => TxnType::Credit,
                _ => TxnType::Debit,
            };
            let category = sub
                .get_one::<String>("category")
                .cloned()
                .unwrap_or_else(|| {
                    match kind {
                        TxnType::Credit => "Income",
                        TxnType::Debit => "Food",
                    }
                    .to_string()
                });
            let txn = Transaction {
                id: None,
                merchant: sub.get_one::<String>("merchant").unwrap().clone(),
                amount: parse_amount_or_zero(sub.get_one::<String>("amount").unwrap()),
                date: sub
                    .get_one::<String>("date")
                    .cloned()
                    .unwrap_or_else(current_date),
                category,
                kind,
            };
            // A rejected save bails out here; no refresh, no success line.
            let receipt = client.save_expense(&txn)?;
            println!("Saved '{}' as #{}", txn.merchant, receipt.id);
            let txns = client.expenses()?;
            render_snapshot(conn, &txns)?;
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            client.delete_expense(id)?;
            println!("Deleted #{}", id);
            let txns = client.expenses()?;
            render_snapshot(conn, &txns)?;
        }
        _ => {}
    }
    Ok(())
}

/// The history table plus the dashboard card, always over a freshly
/// fetched full snapshot.
pub fn render_snapshot(conn: &Connection, txns: &[Transaction]) -> Result<()> {
    let rows: Vec<Vec<String>> = txns
        .iter()
        .map(|t| {
            let signed = match t.kind {
                TxnType::Credit => format!("+ {}", fmt_money(&t.amount)),
                TxnType::Debit => format!("- {}", fmt_money(&t.amount)),
            };
            vec![
                t.id.map(|i| i.to_string()).unwrap_or_default(),
                t.merchant.clone(),
                t.category.clone(),
                t.date.clone(),
                signed,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Merchant", "Category", "Date", "Amount"], rows)
    );

    let totals = ledger::totals(txns);
    let initial = store::get_initial_balance(conn)?;
    println!(
        "Spent {}   Income {}   Balance {} (start {})",
        fmt_money(&totals.spent),
        fmt_money(&totals.income),
        fmt_money(&ledger::current_balance(initial, &totals)),
        fmt_money(&initial),
    );
    Ok(())
}
