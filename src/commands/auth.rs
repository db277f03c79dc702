// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::LedgerClient;
use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let email = sub.get_one::<String>("email").unwrap();
            let password = sub.get_one::<String>("password").unwrap();
            // token deliberately absent: this call mints it
            let client = LedgerClient::new(store::get_base_url(conn)?, None)?;
            let resp = client.login(email, password)?;
            store::set_token(conn, &resp.access_token)?;
            println!("Logged in as {}", email);
        }
        Some(("register", sub)) => {
            let email = sub.get_one::<String>("email").unwrap();
            let password = sub.get_one::<String>("password").unwrap();
            let client = LedgerClient::new(store::get_base_url(conn)?, None)?;
            let resp = client.register(email, password)?;
            store::set_token(conn, &resp.access_token)?;
            println!("Registered and logged in as {}", email);
        }
        Some(("google", sub)) => {
            let token = sub.get_one::<String>("token").unwrap();
            let client = LedgerClient::new(store::get_base_url(conn)?, None)?;
            let resp = client.google_login(token)?;
            store::set_token(conn, &resp.access_token)?;
            println!("Logged in via federated identity");
        }
        Some(("logout", _)) => {
            store::clear_session(conn)?;
            println!("Logged out; chat history cleared");
        }
        Some(("status", _)) => match store::get_token(conn)? {
            Some(_) => println!("Session active ({})", store::get_base_url(conn)?),
            None => println!("Not logged in"),
        },
        _ => {}
    }
    Ok(())
}
