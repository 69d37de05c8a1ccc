// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::User;
use crate::store::Store;

/// Where the session currently stands. `LoadingSnapshot` is observable between
/// the decision to bind a user and the completed snapshot load; with the
/// synchronous store it only survives that window when a load fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    LoadingSnapshot,
    SessionActive(String),
}

/// Ties the identity provider's current user to the ledger holding that
/// user's snapshot. The bound ledger is replaced wholesale on every sign-in;
/// nothing from a prior session's data survives a rebind.
pub struct Session<'a> {
    store: &'a Store,
    state: SessionState,
    ledger: Option<Ledger<'a>>,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            state: SessionState::NoSession,
            ledger: None,
        }
    }

    /// Rebuilds the session from the persisted current user, the equivalent
    /// of the original app restoring state on page load.
    pub fn resume(store: &'a Store, user: Option<&User>) -> Result<Self, LedgerError> {
        let mut s = Self::new(store);
        if let Some(u) = user {
            s.bind(u)?;
        }
        Ok(s)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Binds a signed-in user, loading their snapshot. A bind while another
    /// session is active discards the prior in-memory ledger first; every
    /// mutation persisted synchronously, so nothing unsaved is lost.
    pub fn bind(&mut self, user: &User) -> Result<(), LedgerError> {
        self.ledger = None;
        self.state = SessionState::LoadingSnapshot;
        let ledger = Ledger::load(self.store, &user.id)?;
        self.ledger = Some(ledger);
        self.state = SessionState::SessionActive(user.id.clone());
        Ok(())
    }

    /// Sign-out: drops the in-memory snapshot only; the persisted one stays.
    pub fn clear(&mut self) {
        self.ledger = None;
        self.state = SessionState::NoSession;
    }

    pub fn ledger(&self) -> Option<&Ledger<'a>> {
        self.ledger.as_ref()
    }

    pub fn ledger_mut(&mut self) -> Option<&mut Ledger<'a>> {
        self.ledger.as_mut()
    }
}
