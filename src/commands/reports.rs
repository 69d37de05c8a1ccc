// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;

use crate::aggregate;
use crate::ledger::Ledger;
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let session = super::active_session(store)?;
    let ledger = session
        .ledger()
        .expect("active session always carries a ledger");
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let t = ledger.totals();
    // Savings rate over all recorded income, zero when nothing was earned.
    let rate = if t.income.is_zero() {
        Decimal::ZERO
    } else {
        t.balance / t.income * Decimal::from(100)
    };
    let v = json!({
        "income": fmt_amount(&t.income),
        "expenses": fmt_amount(&t.expenses),
        "balance": fmt_amount(&t.balance),
        "savingsRate": format!("{:.1}", rate.round_dp(1)),
    });
    if !maybe_print_json(json_flag, jsonl_flag, &v)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_amount(&t.income)],
            vec!["Expenses".to_string(), fmt_amount(&t.expenses)],
            vec!["Balance".to_string(), fmt_amount(&t.balance)],
            vec![
                "Savings rate".to_string(),
                format!("{:.1}%", rate.round_dp(1)),
            ],
        ];
        println!("{}", pretty_table(&["Figure", "Amount"], rows));
    }
    Ok(())
}

fn spend_by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let breakdown = aggregate::category_breakdown(ledger.list());
    let mut items: Vec<_> = breakdown.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let data: Vec<Vec<String>> = items
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_amount(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}
