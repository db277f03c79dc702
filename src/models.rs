// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `"Debit"` / `"Credit"` on the wire. The backend defaults missing
/// types to Debit, and so do we.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnType {
    #[default]
    Debit,
    Credit,
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxnType::Debit => write!(f, "Debit"),
            TxnType::Credit => write!(f, "Credit"),
        }
    }
}

/// One ledger entry. `id` is assigned by the backend and absent on
/// client-constructed records pending save. Amounts travel as JSON
/// numbers; anything missing collapses to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub merchant: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: TxnType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Backend acknowledgement for `save-expense`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReceipt {
    pub status: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_user: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Fields the backend's OCR pass extracts from a receipt image. The
/// amount comes back pre-formatted, not as a number.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptAnalysis {
    pub id: i64,
    pub merchant: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}
