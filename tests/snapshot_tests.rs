// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::auth::Auth;
use billfold::ledger::Ledger;
use billfold::models::{TransactionInput, TxKind};
use billfold::store::{KEY_FINANCIAL_DATA, Store};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn input(kind: TxKind, amount: &str, category: &str, day: u32) -> TransactionInput {
    TransactionInput {
        kind: Some(kind),
        amount: Some(amount.to_string()),
        category: Some(category.to_string()),
        description: Some(format!("entry {day}")),
        date: NaiveDate::from_ymd_opt(2025, 8, day),
    }
}

#[test]
fn snapshot_round_trips_with_order_and_totals_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("billfold.sqlite");
    let uid;
    let before;
    {
        let store = Store::open_at(&path).unwrap();
        let user = Auth::new(&store).signup("ivy@example.com", "pw").unwrap();
        uid = user.id;
        let mut ledger = Ledger::load(&store, &uid).unwrap();
        ledger.add_transaction(&input(TxKind::Income, "5000", "salary", 1)).unwrap();
        ledger.add_transaction(&input(TxKind::Expense, "12.34", "food", 3)).unwrap();
        ledger.add_transaction(&input(TxKind::Expense, "80", "transport", 2)).unwrap();
        before = ledger.snapshot().clone();
    }

    // Reopen from disk: same order, same field values, same recomputed totals.
    let store = Store::open_at(&path).unwrap();
    let ledger = Ledger::load(&store, &uid).unwrap();
    assert_eq!(*ledger.snapshot(), before);
    let t = ledger.totals();
    assert_eq!(t.income, Decimal::from(5000));
    assert_eq!(t.expenses, "92.34".parse::<Decimal>().unwrap());
    assert_eq!(t.balance, t.income - t.expenses);
}

#[test]
fn persisted_blob_uses_the_legacy_field_names() {
    let store = Store::open_in_memory().unwrap();
    let user = Auth::new(&store).signup("jack@example.com", "pw").unwrap();
    let mut ledger = Ledger::load(&store, &user.id).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "10", "food", 5)).unwrap();

    let raw = store.get(KEY_FINANCIAL_DATA).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let snap = &v[user.id.as_str()];
    assert!(snap.get("recentTransactions").is_some());
    assert!(snap.get("monthlyIncome").is_some());
    assert!(snap.get("monthlyExpenses").is_some());
    assert!(snap.get("savings").is_some());
    assert_eq!(snap["recentTransactions"][0]["type"], "expense");
}

#[test]
fn cached_totals_follow_every_mutation() {
    let store = Store::open_in_memory().unwrap();
    let user = Auth::new(&store).signup("kim@example.com", "pw").unwrap();
    let mut ledger = Ledger::load(&store, &user.id).unwrap();

    ledger.add_transaction(&input(TxKind::Income, "100", "other", 1)).unwrap();
    let tx = ledger.add_transaction(&input(TxKind::Expense, "40", "bills", 2)).unwrap();
    assert_eq!(ledger.snapshot().savings, Decimal::from(60));

    ledger.delete_transaction(&tx.id).unwrap();
    assert_eq!(ledger.snapshot().monthly_expenses, Decimal::ZERO);
    assert_eq!(ledger.snapshot().savings, Decimal::from(100));

    // A fresh load of the same user sees the recomputed cache, not stale values.
    let reloaded = Ledger::load(&store, &user.id).unwrap();
    assert_eq!(reloaded.snapshot().savings, Decimal::from(100));
}

#[test]
fn load_with_no_stored_data_yields_defaults() {
    let store = Store::open_in_memory().unwrap();
    let ledger = Ledger::load(&store, "ghost").unwrap();
    assert!(ledger.list().is_empty());
    assert_eq!(ledger.snapshot().savings, Decimal::ZERO);
    assert!(!ledger.snapshot().categories.expense.is_empty());
}
