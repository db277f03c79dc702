// Copyright (c) 2025 ExpenseX.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Remote ledger client: one method per backend capability.
//!
//! The session token is passed in at construction and owned by the
//! caller (the preference store sets it on login and clears it on
//! logout); there is no process-global credential.

use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::StatusCode;
use rusqlite::Connection;
use std::time::Duration;

use crate::models::{
    ChatMessage, ChatReply, ChatRequest, GoogleLoginRequest, ReceiptAnalysis, RegisterRequest,
    SaveReceipt, TokenResponse, Transaction,
};
use crate::store;

const UA: &str = concat!("expensex/", env!("CARGO_PKG_VERSION"));

// Fixed transport ceilings applied to every call; no retry on top.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: wrong credentials, or no active session (log in again)")]
    Unauthorized,
    #[error("Backend rejected the record (status '{status}')")]
    Rejected { status: String },
    #[error("Could not read image file: {0}")]
    Image(#[from] std::io::Error),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SaveReceipt {
    /// Anything but status "saved" is a rejection; callers bail before
    /// refreshing the list or printing a success line.
    pub fn into_accepted(self) -> Result<SaveReceipt, ApiError> {
        if self.status == "saved" {
            Ok(self)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
            })
        }
    }
}

pub struct LedgerClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl LedgerClient {
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(UA)
            .build()?;
        Ok(LedgerClient {
            base_url,
            token,
            http,
        })
    }

    /// Client wired from the preference store: configured base URL plus
    /// whatever session is currently persisted.
    pub fn from_store(conn: &Connection) -> anyhow::Result<Self> {
        let base_url = store::get_base_url(conn)?;
        let token = store::get_token(conn)?;
        Ok(LedgerClient::new(base_url, token)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, rb: RequestBuilder) -> Result<Response, ApiError> {
        let rb = match &self.token {
            Some(t) => rb.bearer_auth(t),
            None => rb,
        };
        let resp = rb.send()?;
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Ok(resp.error_for_status()?),
        }
    }

    // --- auth ---

    pub fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        log::debug!("POST token for {}", email);
        let form = [("username", email), ("password", password)];
        let resp = self.send(self.http.post(self.url("token")).form(&form))?;
        Ok(resp.json()?)
    }

    pub fn register(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(self.http.post(self.url("register")).json(&body))?;
        Ok(resp.json()?)
    }

    /// Exchange a federated identity token for a session token. The
    /// federation handshake itself happens outside this client.
    pub fn google_login(&self, id_token: &str) -> Result<TokenResponse, ApiError> {
        let body = GoogleLoginRequest {
            token: id_token.to_string(),
        };
        let resp = self.send(self.http.post(self.url("google-login")).json(&body))?;
        Ok(resp.json()?)
    }

    // --- ledger ---

    /// Full snapshot of the remote ledger; there is no cached or
    /// incremental variant.
    pub fn expenses(&self) -> Result<Vec<Transaction>, ApiError> {
        log::debug!("GET expenses");
        let resp = self.send(self.http.get(self.url("expenses")))?;
        Ok(resp.json()?)
    }

    /// Persist one new record. Anything but status "saved" is treated
    /// as a rejection and must not be followed by a refresh.
    pub fn save_expense(&self, txn: &Transaction) -> Result<SaveReceipt, ApiError> {
        let resp = self.send(self.http.post(self.url("save-expense")).json(txn))?;
        let receipt: SaveReceipt = resp.json()?;
        receipt.into_accepted()
    }

    pub fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("expense/{}", id))))?;
        Ok(())
    }

    pub fn analyze_receipt(&self, path: &std::path::Path) -> Result<ReceiptAnalysis, ApiError> {
        let form = multipart::Form::new().file("file", path)?;
        let resp = self.send(self.http.post(self.url("analyze-receipt")).multipart(form))?;
        Ok(resp.json()?)
    }

    // --- chat ---

    pub fn chat(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
            history: history.to_vec(),
        };
        let resp = self.send(self.http.post(self.url("chat")).json(&body))?;
        Ok(resp.json()?)
    }
}
