// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// A single ledger entry. `id` is assigned once at validation time and never
/// changes afterwards, including across partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// The enumerated category lists carried in every snapshot, seeded at signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            income: ["salary", "freelance", "investments", "other"]
                .map(String::from)
                .to_vec(),
            expense: ["food", "transport", "entertainment", "bills", "shopping", "other"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl CategorySet {
    pub fn for_kind(&self, kind: TxKind) -> &[String] {
        match kind {
            TxKind::Income => &self.income,
            TxKind::Expense => &self.expense,
        }
    }
}

/// Per-user persisted state. The transaction list is the single source of
/// truth; `monthly_income`, `monthly_expenses` and `savings` are a cache the
/// ledger recomputes after every mutation. Field names match the blobs the
/// store already holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(rename = "recentTransactions")]
    pub transactions: Vec<Transaction>,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub savings: Decimal,
    pub categories: CategorySet,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            monthly_income: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,
            savings: Decimal::ZERO,
            categories: CategorySet::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A transaction candidate as it arrives from the outside. Amount stays a
/// string until `Transaction::validate` has parsed it.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub kind: Option<TxKind>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Partial update applied on top of an existing transaction; unset fields keep
/// their current values.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TxKind>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

// Seeded from the wall clock so ids stay practically unique across restarts,
// then strictly incremented so two entries in the same millisecond cannot
// collide within a process.
static NEXT_ID: Lazy<AtomicI64> = Lazy::new(|| AtomicI64::new(Utc::now().timestamp_millis()));

pub fn fresh_id() -> String {
    NEXT_ID.fetch_add(1, Ordering::Relaxed).to_string()
}

impl Transaction {
    /// Validates a candidate against the entity rules and the snapshot's
    /// category lists, assigning a fresh id on success.
    pub fn validate(
        input: &TransactionInput,
        categories: &CategorySet,
    ) -> Result<Self, ValidationError> {
        let kind = input.kind.ok_or(ValidationError::MissingField("type"))?;
        let raw_amount = match input.amount.as_deref() {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return Err(ValidationError::MissingField("amount")),
        };
        let category = match input.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => return Err(ValidationError::MissingField("category")),
        };
        let date = input.date.ok_or(ValidationError::MissingField("date"))?;

        let amount: Decimal = raw_amount
            .parse()
            .map_err(|_| ValidationError::NotNumeric(raw_amount.to_string()))?;
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }
        if !categories.for_kind(kind).iter().any(|c| c == &category) {
            return Err(ValidationError::UnknownCategory {
                kind: kind.as_str(),
                name: category,
            });
        }

        Ok(Self {
            id: fresh_id(),
            kind,
            amount,
            category,
            description: input.description.clone().unwrap_or_default(),
            date,
        })
    }

    /// Merges a patch over this transaction, yielding the candidate that must
    /// pass `validate` again before it replaces the original.
    pub fn merged_input(&self, patch: &TransactionPatch) -> TransactionInput {
        TransactionInput {
            kind: Some(patch.kind.unwrap_or(self.kind)),
            amount: Some(
                patch
                    .amount
                    .clone()
                    .unwrap_or_else(|| self.amount.to_string()),
            ),
            category: Some(
                patch
                    .category
                    .clone()
                    .unwrap_or_else(|| self.category.clone()),
            ),
            description: Some(
                patch
                    .description
                    .clone()
                    .unwrap_or_else(|| self.description.clone()),
            ),
            date: Some(patch.date.unwrap_or(self.date)),
        }
    }
}
