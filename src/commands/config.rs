// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::store::{self, Store};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dark-mode", sub)) => match sub.get_one::<String>("state").map(String::as_str) {
            Some("on") => {
                store::set_dark_mode(store, true)?;
                println!("Dark mode on");
            }
            Some("off") => {
                store::set_dark_mode(store, false)?;
                println!("Dark mode off");
            }
            Some(other) => bail!("Unknown state '{}' (use on|off)", other),
            None => {
                let on = store::get_dark_mode(store)?;
                println!("Dark mode is {}", if on { "on" } else { "off" });
            }
        },
        _ => {}
    }
    Ok(())
}
