// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::api::LedgerClient;
use crate::commands::tx::render_snapshot;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("scan", sub)) => {
            let image = sub.get_one::<String>("image").unwrap();
            let client = LedgerClient::from_store(conn)?;
            // the backend persists the extracted record itself
            let analysis = client.analyze_receipt(Path::new(image))?;
            println!(
                "Added: {} - {} ({}, {})",
                analysis.merchant, analysis.amount, analysis.category, analysis.date
            );
            let txns = client.expenses()?;
            render_snapshot(conn, &txns)?;
        }
        _ => {}
    }
    Ok(())
}
