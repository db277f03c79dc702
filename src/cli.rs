// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("expensex")
        .about("ExpenseX: command-line client for the ExpenseX expense-tracking backend")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local preference store"))
        .subcommand(
            Command::new("auth")
                .about("Session management")
                .subcommand(
                    Command::new("login")
                        .about("Exchange email/password for a session token")
                        .arg(Arg::new("email").long("email").short('e').required(true))
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("register")
                        .about("Create an account and start a session")
                        .arg(Arg::new("email").long("email").short('e').required(true))
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("google")
                        .about("Exchange a federated identity token for a session token")
                        .arg(Arg::new("token").long("token").required(true)),
                )
                .subcommand(
                    Command::new("logout").about("Clear the session token and chat history"),
                )
                .subcommand(Command::new("status").about("Show whether a session is active")),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions on the remote ledger")
                .subcommand(Command::new("list").about("Fetch and display the full ledger"))
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction manually")
                        .arg(Arg::new("merchant").long("merchant").short('m').required(true))
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .help("Defaults to Income for credits, Food for debits"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["Debit", "Credit"])
                                .default_value("Debit"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Display date, defaults to today"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by backend id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard views over the ledger snapshot")
                .subcommand(
                    Command::new("summary").about("Total spend, income, and current balance"),
                )
                .subcommand(
                    Command::new("categories").about("Debit spend grouped by category"),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Locally stored initial balance")
                .subcommand(
                    Command::new("set")
                        .about("Set the baseline the current balance is computed from")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(Command::new("show").about("Show the stored initial balance")),
        )
        .subcommand(
            Command::new("chat")
                .about("Talk to the spending assistant")
                .subcommand(
                    Command::new("send")
                        .about("Send one message and print the reply")
                        .arg(Arg::new("message").required(true)),
                )
                .subcommand(Command::new("show").about("Print the conversation so far"))
                .subcommand(Command::new("clear").about("Forget the conversation")),
        )
        .subcommand(
            Command::new("receipt")
                .about("Receipt scanning")
                .subcommand(
                    Command::new("scan")
                        .about("Upload a receipt image for automated extraction")
                        .arg(Arg::new("image").required(true)),
                ),
        )
        .subcommand(
            Command::new("sms")
                .about("Bank-notification ingestion")
                .subcommand(
                    Command::new("ingest")
                        .about("Run the transaction detector over one SMS")
                        .arg(Arg::new("sender").long("sender").required(true))
                        .arg(Arg::new("body").long("body").required(true))
                        .arg(
                            Arg::new("save")
                                .long("save")
                                .action(ArgAction::SetTrue)
                                .help("Record the detected transaction on the ledger"),
                        ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the ledger snapshot to a file")
                .arg(Arg::new("out").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the backend base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the current configuration")),
        )
}
