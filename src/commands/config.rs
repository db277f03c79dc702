// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            store::set_base_url(conn, url)?;
            println!("Backend URL set to {}", store::get_base_url(conn)?);
        }
        Some(("show", _)) => {
            println!("Backend URL: {}", store::get_base_url(conn)?);
            println!(
                "Session: {}",
                if store::get_token(conn)?.is_some() {
                    "active"
                } else {
                    "none"
                }
            );
            println!("Store: {}", store::store_path()?.display());
        }
        _ => {}
    }
    Ok(())
}
