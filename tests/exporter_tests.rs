// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensex::commands::exporter;
use expensex::models::{Transaction, TxnType};

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: Some(1),
            merchant: "Cafe".to_string(),
            amount: "120.50".parse().unwrap(),
            date: "01 Aug 2026".to_string(),
            category: "Food".to_string(),
            kind: TxnType::Debit,
        },
        Transaction {
            id: Some(2),
            merchant: "Salary".to_string(),
            amount: "5000".parse().unwrap(),
            date: "01 Aug 2026".to_string(),
            category: "Income".to_string(),
            kind: TxnType::Credit,
        },
    ]
}

#[test]
fn csv_export_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ledger.csv");
    exporter::write_snapshot(&sample(), out.to_str().unwrap(), "csv").unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,merchant,amount,date,category,type"
    );
    assert_eq!(lines.next().unwrap(), "1,Cafe,120.50,01 Aug 2026,Food,Debit");
    assert_eq!(
        lines.next().unwrap(),
        "2,Salary,5000,01 Aug 2026,Income,Credit"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn json_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ledger.json");
    exporter::write_snapshot(&sample(), out.to_str().unwrap(), "json").unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let back: Vec<Transaction> = serde_json::from_str(&text).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].merchant, "Cafe");
    assert_eq!(back[1].kind, TxnType::Credit);
}
