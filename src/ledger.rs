// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use crate::aggregate::{self, Totals};
use crate::error::{LedgerError, StoreError};
use crate::models::{Snapshot, Transaction, TransactionInput, TransactionPatch};
use crate::store::{KEY_FINANCIAL_DATA, Store};

/// The active user's in-memory ledger. Owns its snapshot exclusively for the
/// lifetime of the session; every mutation recomputes the cached totals from
/// the full transaction list and writes the snapshot through to the store
/// before returning.
pub struct Ledger<'a> {
    store: &'a Store,
    user_id: String,
    snapshot: Snapshot,
}

impl<'a> Ledger<'a> {
    /// Loads the user's snapshot, falling back to a default-initialized one
    /// (zero totals, seeded categories, no transactions) when the store has
    /// nothing for this user. Missing data is not an error.
    pub fn load(store: &'a Store, user_id: &str) -> Result<Self, LedgerError> {
        let all = read_all(store)?;
        let snapshot = all.get(user_id).cloned().unwrap_or_default();
        Ok(Self {
            store,
            user_id: user_id.to_string(),
            snapshot,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Read-only view of the transaction sequence, in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn totals(&self) -> Totals {
        aggregate::totals(&self.snapshot.transactions)
    }

    pub fn add_transaction(
        &mut self,
        input: &TransactionInput,
    ) -> Result<Transaction, LedgerError> {
        let tx = Transaction::validate(input, &self.snapshot.categories)?;
        self.snapshot.transactions.push(tx.clone());
        self.recompute_and_persist()?;
        Ok(tx)
    }

    /// Partial update: unspecified patch fields keep their current values, the
    /// merged result is re-validated in full, and the original id survives.
    pub fn update_transaction(
        &mut self,
        id: &str,
        patch: &TransactionPatch,
    ) -> Result<Transaction, LedgerError> {
        let pos = self
            .snapshot
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        let merged = self.snapshot.transactions[pos].merged_input(patch);
        let mut tx = Transaction::validate(&merged, &self.snapshot.categories)?;
        tx.id = id.to_string();
        self.snapshot.transactions[pos] = tx.clone();
        self.recompute_and_persist()?;
        Ok(tx)
    }

    /// Deleting an unknown id is an error, not a no-op, so a repeated delete
    /// of the same id reports NotFound.
    pub fn delete_transaction(&mut self, id: &str) -> Result<(), LedgerError> {
        let pos = self
            .snapshot
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        self.snapshot.transactions.remove(pos);
        self.recompute_and_persist()?;
        Ok(())
    }

    fn recompute_and_persist(&mut self) -> Result<(), StoreError> {
        let t = aggregate::totals(&self.snapshot.transactions);
        self.snapshot.monthly_income = t.income;
        self.snapshot.monthly_expenses = t.expenses;
        self.snapshot.savings = t.balance;

        let mut all = read_all(self.store)?;
        all.insert(self.user_id.clone(), self.snapshot.clone());
        self.store.set_json(KEY_FINANCIAL_DATA, &all)
    }
}

/// Seeds a fresh default snapshot for a new user id. Called once at signup.
pub fn seed_snapshot(store: &Store, user_id: &str) -> Result<(), StoreError> {
    let mut all = read_all(store)?;
    all.entry(user_id.to_string()).or_default();
    store.set_json(KEY_FINANCIAL_DATA, &all)
}

fn read_all(store: &Store) -> Result<BTreeMap<String, Snapshot>, StoreError> {
    Ok(store.get_json(KEY_FINANCIAL_DATA)?.unwrap_or_default())
}
