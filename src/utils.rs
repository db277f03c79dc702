// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// User-typed amounts fall back to 0 rather than failing the whole
/// record, matching the backend's tolerance for sloppy input.
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    s.parse::<Decimal>().unwrap_or_default()
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("₹ {:.2}", d.round_dp(2))
}

/// Ledger display date, e.g. "29 Aug 2026".
pub fn current_date() -> String {
    chrono::Local::now().format("%d %b %Y").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Proportional bar for the category breakdown, `width` cells wide at
/// 100% share.
pub fn share_bar(share: Decimal, width: usize) -> String {
    use rust_decimal::prelude::ToPrimitive;
    let filled = (share * Decimal::from(width as u64))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    "█".repeat(filled)
}
