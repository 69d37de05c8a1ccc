// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod transactions;
pub mod reports;
pub mod exporter;
pub mod config;

use anyhow::{Result, bail};

use crate::auth::Auth;
use crate::session::Session;
use crate::store::Store;

/// Resumes the session for the persisted current user; ledger commands all
/// start here.
pub fn active_session(store: &Store) -> Result<Session<'_>> {
    let user = Auth::new(store).current_user()?;
    match user {
        Some(u) => Ok(Session::resume(store, Some(&u))?),
        None => bail!("Not signed in; run 'billfold signin' first"),
    }
}
