// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let session = super::active_session(store)?;
    let ledger = session
        .ledger()
        .expect("active session always carries a ledger");
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let cats = &ledger.snapshot().categories;
            if !maybe_print_json(json_flag, jsonl_flag, cats)? {
                let mut data = Vec::new();
                for c in &cats.income {
                    data.push(vec!["income".to_string(), c.clone()]);
                }
                for c in &cats.expense {
                    data.push(vec!["expense".to_string(), c.clone()]);
                }
                println!("{}", pretty_table(&["Kind", "Category"], data));
            }
        }
        _ => {}
    }
    Ok(())
}
