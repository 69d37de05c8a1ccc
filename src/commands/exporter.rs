// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::ledger::Ledger;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let session = super::active_session(store)?;
    let ledger = session
        .ledger()
        .expect("active session always carries a ledger");
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "amount", "category", "description"])?;
            for t in ledger.list() {
                wtr.write_record([
                    t.id.as_str(),
                    &t.date.to_string(),
                    t.kind.as_str(),
                    &t.amount.to_string(),
                    t.category.as_str(),
                    t.description.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = ledger
                .list()
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date, "type": t.kind.as_str(),
                        "amount": t.amount, "category": t.category,
                        "description": t.description
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
