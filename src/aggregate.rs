// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Transaction, TxKind};

/// Derived figures over a transaction sequence. `balance` is always
/// `income - expenses`; an empty sequence yields all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expenses += t.amount,
        }
    }
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Sums expense amounts per category. Income entries never contribute, and
/// categories whose sum is zero are left out entirely so chart consumers see
/// only populated slices. BTreeMap keeps the ordering deterministic.
pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions {
        if t.kind == TxKind::Expense {
            *agg.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
        }
    }
    agg.retain(|_, v| !v.is_zero());
    agg
}
