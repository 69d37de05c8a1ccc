// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::auth::Auth;
use billfold::cli;
use billfold::commands::transactions;
use billfold::error::LedgerError;
use billfold::ledger::Ledger;
use billfold::models::{TransactionInput, TransactionPatch, TxKind};
use billfold::store::Store;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup() -> (Store, String) {
    let store = Store::open_in_memory().unwrap();
    let user = Auth::new(&store).signup("alice@example.com", "hunter2").unwrap();
    (store, user.id)
}

fn input(kind: TxKind, amount: &str, category: &str) -> TransactionInput {
    TransactionInput {
        kind: Some(kind),
        amount: Some(amount.to_string()),
        category: Some(category.to_string()),
        description: Some(String::new()),
        date: NaiveDate::from_ymd_opt(2025, 8, 1),
    }
}

#[test]
fn add_appends_in_insertion_order() {
    let (store, uid) = setup();
    let mut ledger = Ledger::load(&store, &uid).unwrap();
    ledger.add_transaction(&input(TxKind::Income, "5000", "salary")).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "1200", "food")).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "80", "transport")).unwrap();

    let cats: Vec<_> = ledger.list().iter().map(|t| t.category.as_str()).collect();
    assert_eq!(cats, ["salary", "food", "transport"]);
}

#[test]
fn update_replaces_amount_not_accumulates() {
    // Scenario: 100 food updated to 300 must read back as 300, not 400.
    let (store, uid) = setup();
    let mut ledger = Ledger::load(&store, &uid).unwrap();
    let tx = ledger.add_transaction(&input(TxKind::Expense, "100", "food")).unwrap();

    let patch = TransactionPatch {
        amount: Some("300".to_string()),
        ..Default::default()
    };
    let updated = ledger.update_transaction(&tx.id, &patch).unwrap();
    assert_eq!(updated.id, tx.id);
    assert_eq!(updated.amount, Decimal::from(300));
    assert_eq!(updated.category, "food");

    let breakdown = billfold::aggregate::category_breakdown(ledger.list());
    assert_eq!(breakdown.get("food"), Some(&Decimal::from(300)));
}

#[test]
fn update_unknown_id_is_not_found_and_keeps_state() {
    let (store, uid) = setup();
    let mut ledger = Ledger::load(&store, &uid).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "100", "food")).unwrap();

    let patch = TransactionPatch {
        amount: Some("300".to_string()),
        ..Default::default()
    };
    let err = ledger.update_transaction("nope", &patch).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
    assert_eq!(ledger.list().len(), 1);
    assert_eq!(ledger.list()[0].amount, Decimal::from(100));
}

#[test]
fn second_delete_of_same_id_reports_not_found() {
    let (store, uid) = setup();
    let mut ledger = Ledger::load(&store, &uid).unwrap();
    ledger.add_transaction(&input(TxKind::Income, "5000", "salary")).unwrap();
    let tx = ledger.add_transaction(&input(TxKind::Expense, "100", "food")).unwrap();

    ledger.delete_transaction(&tx.id).unwrap();
    let totals_after_first = ledger.totals();

    let err = ledger.delete_transaction(&tx.id).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
    assert_eq!(ledger.totals(), totals_after_first);
    assert_eq!(totals_after_first.income, Decimal::from(5000));
    assert_eq!(totals_after_first.expenses, Decimal::ZERO);
}

#[test]
fn list_limit_and_filters_respected() {
    let (store, uid) = setup();
    let mut ledger = Ledger::load(&store, &uid).unwrap();
    ledger.add_transaction(&input(TxKind::Income, "5000", "salary")).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "10", "food")).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "20", "food")).unwrap();
    ledger.add_transaction(&input(TxKind::Expense, "30", "bills")).unwrap();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["billfold", "tx", "list", "--type", "expense", "--limit", "2"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&ledger, list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].amount, "10.00");
    assert_eq!(rows[1].amount, "20.00");

    let matches = cli::build_cli().get_matches_from(["billfold", "tx", "list", "--category", "bills"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&ledger, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "bills");
}
