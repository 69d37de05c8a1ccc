// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// A transaction candidate rejected at the entity boundary. The ledger is left
/// untouched whenever one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("amount '{0}' is not a number")]
    NotNumeric(String),

    #[error("amount must not be negative")]
    NegativeAmount,

    #[error("unknown {kind} category '{name}'")]
    UnknownCategory { kind: &'static str, name: String },
}

/// Failure talking to the key-value store, or a blob that no longer parses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store access failed: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("corrupt record under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode record for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by ledger operations. Validation and NotFound leave both the
/// in-memory and persisted state unchanged; after a Persistence error the
/// in-memory snapshot may be ahead of the durable one, which callers should
/// report rather than ignore.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("transaction '{0}' not found")]
    NotFound(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("a user with email '{0}' already exists")]
    EmailTaken(String),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}
