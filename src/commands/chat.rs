// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::LedgerClient;
use crate::models::ChatMessage;
use crate::store;

const GREETING: &str = "Hi! I'm connected to your ledger. Ask me anything about your spending!";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("send", sub)) => send(conn, sub.get_one::<String>("message").unwrap())?,
        Some(("show", _)) => show(conn)?,
        Some(("clear", _)) => {
            store::set_chat_history(conn, &[])?;
            store::set_chat_log(conn, &[])?;
            println!("Conversation cleared");
        }
        _ => {}
    }
    Ok(())
}

/// One complete exchange. Two parallel sequences are maintained: the
/// canonical history carries only real turns and is what the backend
/// sees; the display log additionally holds the greeting and any error
/// entries. The history the request carries does not yet include the
/// message being sent.
fn send(conn: &Connection, message: &str) -> Result<()> {
    let client = LedgerClient::from_store(conn)?;
    let mut history = store::get_chat_history(conn)?;
    let mut log = store::get_chat_log(conn)?;
    if log.is_empty() {
        log.push(ChatMessage::bot(GREETING));
    }

    let user_msg = ChatMessage::user(message);
    log.push(user_msg.clone());

    match client.chat(message, &history) {
        Ok(reply) => {
            let bot_msg = ChatMessage::bot(reply.reply);
            log.push(bot_msg.clone());
            history.push(user_msg);
            history.push(bot_msg.clone());
            store::set_chat_history(conn, &history)?;
            store::set_chat_log(conn, &log)?;
            println!("{}", bot_msg.text);
            Ok(())
        }
        Err(e) => {
            // failed exchanges stay out of the canonical history but
            // are recorded in the display log; the command still fails
            log.push(ChatMessage::bot(format!("Error: {}", e)));
            store::set_chat_log(conn, &log)?;
            Err(e.into())
        }
    }
}

fn show(conn: &Connection) -> Result<()> {
    let mut log = store::get_chat_log(conn)?;
    if log.is_empty() {
        log.push(ChatMessage::bot(GREETING));
        store::set_chat_log(conn, &log)?;
    }
    for msg in &log {
        let who = if msg.is_user { "you" } else { " ai" };
        println!("{}> {}", who, msg.text);
    }
    Ok(())
}
