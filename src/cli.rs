// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .about("Local-first personal finance tracker with per-user ledgers")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("signup")
                .about("Register a new user and sign in")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("signin")
                .about("Sign in as an existing user")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("signout").about("Sign out the current user"))
        .subcommand(json_flags(
            Command::new("whoami").about("Show the signed-in user"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("type").long("type").required(true).help("income|expense"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an existing transaction")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions in insertion order")
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived figures over the ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expenses, balance, savings rate"),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category").about("Expense totals per category"),
                )),
        )
        .subcommand(
            Command::new("category").about("Category lists").subcommand(json_flags(
                Command::new("list").about("Show income and expense categories"),
            )),
        )
        .subcommand(
            Command::new("export").about("Export ledger data").subcommand(
                Command::new("transactions")
                    .about("Export the active user's transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("config").about("Local preferences").subcommand(
                Command::new("dark-mode")
                    .about("Show or set the dark mode preference")
                    .arg(Arg::new("state").help("on|off; omit to show")),
            ),
        )
}
