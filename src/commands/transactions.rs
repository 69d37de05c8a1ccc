// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::{TransactionInput, TransactionPatch};
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_kind, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let mut session = super::active_session(store)?;
    let ledger = session
        .ledger_mut()
        .expect("active session always carries a ledger");
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let input = TransactionInput {
        kind: Some(kind),
        amount: sub.get_one::<String>("amount").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        description: sub.get_one::<String>("desc").cloned(),
        date: Some(date),
    };
    let tx = ledger.add_transaction(&input)?;
    println!(
        "Recorded {} {} ({}) on {} (id: {})",
        tx.kind.as_str(),
        fmt_amount(&tx.amount),
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = TransactionPatch {
        kind: sub
            .get_one::<String>("type")
            .map(|s| parse_kind(s))
            .transpose()?,
        amount: sub.get_one::<String>("amount").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        description: sub.get_one::<String>("desc").cloned(),
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    let tx = ledger.update_transaction(id, &patch)?;
    println!(
        "Updated {}: {} {} ({}) on {}",
        tx.id,
        tx.kind.as_str(),
        fmt_amount(&tx.amount),
        tx.category,
        tx.date
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    ledger.delete_transaction(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Insertion order is preserved; filters narrow, `--limit` keeps the first N.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| parse_kind(s))
        .transpose()?;
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for t in ledger.list() {
        if let Some(k) = kind {
            if t.kind != k {
                continue;
            }
        }
        if let Some(c) = category {
            if &t.category != c {
                continue;
            }
        }
        data.push(TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            amount: fmt_amount(&t.amount),
            category: t.category.clone(),
            description: t.description.clone(),
        });
        if let Some(n) = limit {
            if data.len() == n {
                break;
            }
        }
    }
    Ok(data)
}
