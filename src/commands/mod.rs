// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod balance;
pub mod chat;
pub mod config;
pub mod exporter;
pub mod receipt;
pub mod report;
pub mod sms;
pub mod tx;
