// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensex::models::ChatMessage;
use expensex::store;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    store::init_schema(&conn).unwrap();
    conn
}

#[test]
fn token_lifecycle() {
    let conn = setup();
    assert_eq!(store::get_token(&conn).unwrap(), None);

    store::set_token(&conn, "jwt-abc").unwrap();
    assert_eq!(store::get_token(&conn).unwrap().as_deref(), Some("jwt-abc"));

    // a fresh login overwrites
    store::set_token(&conn, "jwt-def").unwrap();
    assert_eq!(store::get_token(&conn).unwrap().as_deref(), Some("jwt-def"));

    store::clear_session(&conn).unwrap();
    assert_eq!(store::get_token(&conn).unwrap(), None);
}

#[test]
fn logout_clears_both_chat_sequences() {
    let conn = setup();
    store::set_token(&conn, "jwt-abc").unwrap();
    store::set_chat_history(
        &conn,
        &[ChatMessage::user("how much did I spend?"), ChatMessage::bot("₹120")],
    )
    .unwrap();
    store::set_chat_log(
        &conn,
        &[
            ChatMessage::bot("Hi!"),
            ChatMessage::user("how much did I spend?"),
            ChatMessage::bot("₹120"),
        ],
    )
    .unwrap();

    store::clear_session(&conn).unwrap();

    assert!(store::get_chat_history(&conn).unwrap().is_empty());
    assert!(store::get_chat_log(&conn).unwrap().is_empty());
}

#[test]
fn chat_sequences_round_trip() {
    let conn = setup();
    let history = vec![ChatMessage::user("hi"), ChatMessage::bot("hello")];
    store::set_chat_history(&conn, &history).unwrap();
    let back = store::get_chat_history(&conn).unwrap();
    assert_eq!(back.len(), 2);
    assert!(back[0].is_user);
    assert_eq!(back[1].text, "hello");
}

#[test]
fn initial_balance_defaults_to_zero_and_round_trips() {
    let conn = setup();
    assert!(store::get_initial_balance(&conn).unwrap().is_zero());

    store::set_initial_balance(&conn, "5000.25".parse().unwrap()).unwrap();
    assert_eq!(
        store::get_initial_balance(&conn).unwrap().to_string(),
        "5000.25"
    );
}

#[test]
fn base_url_gains_trailing_slash() {
    let conn = setup();
    store::set_base_url(&conn, "https://ledger.example.com/api").unwrap();
    assert_eq!(
        store::get_base_url(&conn).unwrap(),
        "https://ledger.example.com/api/"
    );
    store::set_base_url(&conn, "https://ledger.example.com/").unwrap();
    assert_eq!(
        store::get_base_url(&conn).unwrap(),
        "https://ledger.example.com/"
    );
}
