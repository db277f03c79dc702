// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::LedgerClient;
use crate::commands::tx::render_snapshot;
use crate::sms;
use crate::utils::current_date;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("ingest", sub)) => {
            let sender = sub.get_one::<String>("sender").unwrap();
            let body = sub.get_one::<String>("body").unwrap();
            let save = sub.get_flag("save");

            // non-alerts are dropped silently: no output, no log, exit 0
            let Some(alert) = sms::detect(sender, body) else {
                return Ok(());
            };

            println!("{}", alert.title());
            println!("{}", alert.message());

            if save {
                let client = LedgerClient::from_store(conn)?;
                let txn = alert.to_transaction(&current_date());
                let receipt = client.save_expense(&txn)?;
                println!("Saved '{}' as #{}", txn.merchant, receipt.id);
                let txns = client.expenses()?;
                render_snapshot(conn, &txns)?;
            } else {
                println!("(re-run with --save to record it)");
            }
        }
        _ => {}
    }
    Ok(())
}
