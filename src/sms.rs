// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Bank-notification SMS detector.
//!
//! Pure text pipeline: sender allow-list, amount extraction, credit/debit
//! classification. Messages that fail the sender filter or the amount
//! pattern are dropped without a trace; nothing is persisted here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Transaction, TxnType};

/// Senders we trust for transaction alerts, matched case-insensitively
/// as substrings of the SMS header.
const BANK_SENDERS: &[&str] = &[
    "HDFC", "SBI", "ICICI", "PAYTM", "UNION", "UPI", "BOI", "AXIS", "BANK", "WALLET",
];

const CREDIT_KEYWORDS: &[&str] = &["credited", "received", "deposited", "refund"];

// Tolerates 'Rs 100', 'Rs. 100', 'Rs: 100', 'INR 100' and thousands
// separators in the amount.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(rs\.?|inr)[\s:.\-]*(\d+(?:,\d+)*(?:\.\d{2})?)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsAlert {
    /// Extracted amount with separators stripped, e.g. "1234.50".
    pub amount: String,
    pub kind: TxnType,
}

pub fn is_bank_sender(sender: &str) -> bool {
    let s = sender.to_uppercase();
    BANK_SENDERS.iter().any(|b| s.contains(b))
}

pub fn classify(body: &str) -> TxnType {
    let b = body.to_lowercase();
    if CREDIT_KEYWORDS.iter().any(|k| b.contains(k)) {
        TxnType::Credit
    } else {
        TxnType::Debit
    }
}

pub fn extract_amount(body: &str) -> Option<String> {
    AMOUNT_RE
        .captures(body)
        .map(|c| c[2].replace(',', ""))
}

/// Run the full pipeline on one message. `None` means the message was
/// not a recognizable bank transaction alert.
pub fn detect(sender: &str, body: &str) -> Option<SmsAlert> {
    if !is_bank_sender(sender) {
        return None;
    }
    let amount = extract_amount(body)?;
    Some(SmsAlert {
        amount,
        kind: classify(body),
    })
}

impl SmsAlert {
    pub fn title(&self) -> &'static str {
        match self.kind {
            TxnType::Credit => "Money Received!",
            TxnType::Debit => "New Expense Detected",
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            TxnType::Credit => format!("Confirm to add +₹{} to income", self.amount),
            TxnType::Debit => format!("Confirm to add -₹{} to expenses", self.amount),
        }
    }

    /// Ready-to-save record; merchant and category follow the alert
    /// classification, unparsable amounts collapse to 0.
    pub fn to_transaction(&self, date: &str) -> Transaction {
        let (merchant, category) = match self.kind {
            TxnType::Credit => ("Money Received", "Income"),
            TxnType::Debit => ("SMS Transaction", "Bills"),
        };
        Transaction {
            id: None,
            merchant: merchant.to_string(),
            amount: self.amount.parse().unwrap_or_default(),
            date: date.to_string(),
            category: category.to_string(),
            kind: self.kind,
        }
    }
}
