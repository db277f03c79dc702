// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensex::cli;

#[test]
fn sms_ingest_parses_sender_body_and_save_flag() {
    let matches = cli::build_cli().get_matches_from([
        "expensex", "sms", "ingest", "--sender", "VM-HDFCBK", "--body",
        "Rs. 1,234.50 debited from your account", "--save",
    ]);
    let Some(("sms", sms_m)) = matches.subcommand() else {
        panic!("no sms subcommand");
    };
    let Some(("ingest", ingest_m)) = sms_m.subcommand() else {
        panic!("no ingest subcommand");
    };
    assert_eq!(
        ingest_m.get_one::<String>("sender").unwrap(),
        "VM-HDFCBK"
    );
    assert!(ingest_m.get_flag("save"));
}

#[test]
fn tx_add_defaults_type_to_debit() {
    let matches = cli::build_cli().get_matches_from([
        "expensex", "tx", "add", "-m", "Cafe", "-a", "120.50",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(add_m.get_one::<String>("type").unwrap(), "Debit");
    assert_eq!(add_m.get_one::<String>("category"), None);
}

#[test]
fn tx_add_rejects_unknown_type() {
    let res = cli::build_cli().try_get_matches_from([
        "expensex", "tx", "add", "-m", "Cafe", "-a", "10", "-t", "Transfer",
    ]);
    assert!(res.is_err());
}

#[test]
fn tx_rm_parses_numeric_id() {
    let matches = cli::build_cli().get_matches_from(["expensex", "tx", "rm", "42"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("rm", rm_m)) = tx_m.subcommand() else {
        panic!("no rm subcommand");
    };
    assert_eq!(*rm_m.get_one::<i64>("id").unwrap(), 42);
}

#[test]
fn export_defaults_to_csv() {
    let matches =
        cli::build_cli().get_matches_from(["expensex", "export", "/tmp/ledger.csv"]);
    let Some(("export", exp_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    assert_eq!(exp_m.get_one::<String>("format").unwrap(), "csv");
}
