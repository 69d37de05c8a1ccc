// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{AuthError, StoreError};
use crate::ledger;
use crate::models::{User, fresh_id};
use crate::store::{KEY_USER, KEY_USERS, Store};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"));

/// Identity provider over the blob store. Credentials live under `users`, the
/// active identity under `user`; passwords are stored as salted SHA-256 hex
/// digests, never plaintext.
pub struct Auth<'a> {
    store: &'a Store,
}

impl<'a> Auth<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Registers a new user, seeds their default snapshot, and makes them the
    /// current user.
    pub fn signup(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(AuthError::InvalidEmail(email));
        }

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken(email));
        }

        let user = User {
            id: fresh_id(),
            password_hash: hash_password(&email, password),
            email,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.store.set_json(KEY_USERS, &users)?;

        ledger::seed_snapshot(self.store, &user.id)?;
        self.store.set_json(KEY_USER, &user)?;
        Ok(user)
    }

    /// The error is the same for an unknown email and a wrong password, so
    /// signin does not leak which addresses are registered.
    pub fn signin(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim().to_lowercase();
        let users = self.users()?;
        let found = users
            .into_iter()
            .find(|u| u.email == email && u.password_hash == hash_password(&email, password))
            .ok_or(AuthError::InvalidCredentials)?;
        self.store.set_json(KEY_USER, &found)?;
        Ok(found)
    }

    /// Clears the active identity. Registered users and their snapshots stay.
    pub fn signout(&self) -> Result<(), StoreError> {
        self.store.remove(KEY_USER)
    }

    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        self.store.get_json(KEY_USER)
    }

    fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.store.get_json(KEY_USERS)?.unwrap_or_default())
    }
}

fn hash_password(email: &str, password: &str) -> String {
    let mut h = Sha256::new();
    h.update(email.as_bytes());
    h.update(b":");
    h.update(password.as_bytes());
    hex::encode(h.finalize())
}
