// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::auth::Auth;
use billfold::models::{TransactionInput, TxKind};
use billfold::session::{Session, SessionState};
use billfold::store::Store;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn input(kind: TxKind, amount: &str, category: &str) -> TransactionInput {
    TransactionInput {
        kind: Some(kind),
        amount: Some(amount.to_string()),
        category: Some(category.to_string()),
        description: None,
        date: NaiveDate::from_ymd_opt(2025, 8, 1),
    }
}

#[test]
fn starts_without_session() {
    let store = Store::open_in_memory().unwrap();
    let session = Session::resume(&store, None).unwrap();
    assert_eq!(*session.state(), SessionState::NoSession);
    assert!(session.ledger().is_none());
}

#[test]
fn bind_activates_and_loads_the_users_snapshot() {
    let store = Store::open_in_memory().unwrap();
    let user = Auth::new(&store).signup("gina@example.com", "pw").unwrap();

    let mut session = Session::new(&store);
    session.bind(&user).unwrap();
    assert_eq!(*session.state(), SessionState::SessionActive(user.id.clone()));
    assert!(session.ledger().unwrap().list().is_empty());
}

#[test]
fn clear_drops_memory_but_keeps_persisted_snapshot() {
    let store = Store::open_in_memory().unwrap();
    let user = Auth::new(&store).signup("hank@example.com", "pw").unwrap();

    let mut session = Session::resume(&store, Some(&user)).unwrap();
    session
        .ledger_mut()
        .unwrap()
        .add_transaction(&input(TxKind::Income, "900", "salary"))
        .unwrap();
    session.clear();
    assert_eq!(*session.state(), SessionState::NoSession);
    assert!(session.ledger().is_none());

    // The mutation was written through before the sign-out.
    let mut again = Session::new(&store);
    again.bind(&user).unwrap();
    assert_eq!(again.ledger().unwrap().totals().income, Decimal::from(900));
}

#[test]
fn second_signin_replaces_the_ledger_wholesale() {
    let store = Store::open_in_memory().unwrap();
    let auth = Auth::new(&store);
    let alice = auth.signup("alice@example.com", "pw").unwrap();
    let bob = auth.signup("bob@example.com", "pw").unwrap();

    let mut session = Session::new(&store);
    session.bind(&alice).unwrap();
    session
        .ledger_mut()
        .unwrap()
        .add_transaction(&input(TxKind::Expense, "55", "food"))
        .unwrap();

    session.bind(&bob).unwrap();
    assert_eq!(*session.state(), SessionState::SessionActive(bob.id.clone()));
    // Bob's ledger carries none of Alice's entries.
    assert!(session.ledger().unwrap().list().is_empty());

    session.bind(&alice).unwrap();
    assert_eq!(session.ledger().unwrap().totals().expenses, Decimal::from(55));
}
