// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::LedgerClient;
use crate::models::Transaction;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").unwrap();
    let fmt = m.get_one::<String>("format").unwrap();
    let client = LedgerClient::from_store(conn)?;
    let txns = client.expenses()?;
    write_snapshot(&txns, out, fmt)?;
    println!("Exported {} transactions to {}", txns.len(), out);
    Ok(())
}

pub fn write_snapshot(txns: &[Transaction], out: &str, fmt: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "merchant", "amount", "date", "category", "type"])?;
            for t in txns {
                wtr.write_record([
                    t.id.map(|i| i.to_string()).unwrap_or_default(),
                    t.merchant.clone(),
                    t.amount.to_string(),
                    t.date.clone(),
                    t.category.clone(),
                    t.kind.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(txns)?)?;
        }
    }
    Ok(())
}
