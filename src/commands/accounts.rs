// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::auth::Auth;
use crate::store::Store;
use crate::utils::maybe_print_json;

pub fn signup(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = Auth::new(store).signup(email, password)?;
    println!("Signed up and in as {} (id: {})", user.email, user.id);
    Ok(())
}

pub fn signin(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = Auth::new(store).signin(email, password)?;
    println!("Signed in as {}", user.email);
    Ok(())
}

pub fn signout(store: &Store) -> Result<()> {
    Auth::new(store).signout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    match Auth::new(store).current_user()? {
        Some(u) => {
            let v = json!({ "id": u.id, "email": u.email, "createdAt": u.created_at });
            if !maybe_print_json(json_flag, jsonl_flag, &v)? {
                println!("{} (id: {}, since {})", u.email, u.id, u.created_at.date_naive());
            }
        }
        None => println!("Not signed in"),
    }
    Ok(())
}
