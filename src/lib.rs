// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod store;
pub mod models;
pub mod error;
pub mod aggregate;
pub mod ledger;
pub mod auth;
pub mod session;
pub mod utils;
pub mod commands;
