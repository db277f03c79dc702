// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;
use crate::utils::{fmt_money, parse_decimal};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            store::set_initial_balance(conn, amount)?;
            println!("Initial balance set to {}", fmt_money(&amount));
        }
        Some(("show", _)) => {
            let amount = store::get_initial_balance(conn)?;
            println!("Initial balance: {}", fmt_money(&amount));
        }
        _ => {}
    }
    Ok(())
}
