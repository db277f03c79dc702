// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

use crate::models::ChatMessage;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.expensex", "ExpenseX", "expensex"));

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("expensex.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = store_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// The whole local footprint is one key-value table: the ledger itself
/// lives on the backend and is re-fetched in full, never cached here.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

fn unset(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}

// --- session token ---

pub fn get_token(conn: &Connection) -> Result<Option<String>> {
    get(conn, "session_token")
}

pub fn set_token(conn: &Connection, token: &str) -> Result<()> {
    set(conn, "session_token", token)
}

/// Logout: drop the credential and both chat sequences. The next login
/// starts with an empty chat.
pub fn clear_session(conn: &Connection) -> Result<()> {
    unset(conn, "session_token")?;
    unset(conn, "chat_history")?;
    unset(conn, "chat_log")?;
    Ok(())
}

// --- base URL ---

pub fn get_base_url(conn: &Connection) -> Result<String> {
    Ok(get(conn, "base_url")?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
}

pub fn set_base_url(conn: &Connection, url: &str) -> Result<()> {
    // normalize: path segments are joined onto this
    let v = if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    };
    set(conn, "base_url", &v)
}

// --- initial balance ---

pub fn get_initial_balance(conn: &Connection) -> Result<Decimal> {
    match get(conn, "initial_balance")? {
        Some(s) => s
            .parse::<Decimal>()
            .with_context(|| format!("Corrupt initial balance '{}'", s)),
        None => Ok(Decimal::ZERO),
    }
}

pub fn set_initial_balance(conn: &Connection, amount: Decimal) -> Result<()> {
    set(conn, "initial_balance", &amount.to_string())
}

// --- chat sequences ---
//
// Two parallel lists, both append-only between logouts: `chat_history`
// is the canonical (text, isUser) sequence sent to the backend,
// `chat_log` is the richer display sequence (greeting, error entries).

fn get_messages(conn: &Connection, key: &str) -> Result<Vec<ChatMessage>> {
    match get(conn, key)? {
        Some(s) => serde_json::from_str(&s).with_context(|| format!("Corrupt {} entry", key)),
        None => Ok(Vec::new()),
    }
}

fn set_messages(conn: &Connection, key: &str, msgs: &[ChatMessage]) -> Result<()> {
    set(conn, key, &serde_json::to_string(msgs)?)
}

pub fn get_chat_history(conn: &Connection) -> Result<Vec<ChatMessage>> {
    get_messages(conn, "chat_history")
}

pub fn set_chat_history(conn: &Connection, msgs: &[ChatMessage]) -> Result<()> {
    set_messages(conn, "chat_history", msgs)
}

pub fn get_chat_log(conn: &Connection) -> Result<Vec<ChatMessage>> {
    get_messages(conn, "chat_log")
}

pub fn set_chat_log(conn: &Connection, msgs: &[ChatMessage]) -> Result<()> {
    set_messages(conn, "chat_log", msgs)
}
