use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::error::{DropCarsError, Result};
use crate::session::Session;

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
use super::types::{
    Account, AccountFilter, AccountStatus, AccountStatusUpdate, CreditWalletRequest, Document,
    DocumentStatusUpdate, LoginRequest, LoginResponse, Order, ProcessTransferRequest,
    ResetPasswordRequest, Transfer, TransferAction, TransferStatus, Wallet,
};

/// Typed pass-through client for the admin API.
///
/// Every call except `login` needs a token; without one it fails with
/// `DropCarsError::NotLoggedIn` before touching the network.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    token: Option<String>,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let transport =
            HttpTransport::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    pub fn with_session(mut self, session: Option<&Session>) -> Self {
        self.token = session.map(|s| s.access_token.clone());
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Exchange credentials for a token. The client keeps the token on success.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session> {
        let request = ApiRequest::new(Method::Post, "/auth/login")
            .json(&LoginRequest { username, password })?;
        let response: LoginResponse = self.call(request)?;
        info!(user = username, "logged in");

        self.token = Some(response.access_token.clone());
        Ok(Session {
            access_token: response.access_token,
            token_type: response.token_type,
            username: username.to_string(),
        })
    }

    pub fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>> {
        let request = self
            .authed(Method::Get, "/admin/accounts")?
            .query(filter.to_query());
        self.call(request)
    }

    pub fn set_account_status(&self, account_id: &str, status: AccountStatus) -> Result<Account> {
        let request = self
            .authed(Method::Patch, api_path(&["admin", "accounts", account_id, "status"])?)?
            .json(&AccountStatusUpdate { status })?;
        self.call(request)
    }

    pub fn list_documents(&self, account_id: &str) -> Result<Vec<Document>> {
        let path = api_path(&["admin", "accounts", account_id, "documents"])?;
        let request = self.authed(Method::Get, path)?;
        self.call(request)
    }

    pub fn set_document_status(
        &self,
        document_id: &str,
        update: &DocumentStatusUpdate,
    ) -> Result<Document> {
        let request = self
            .authed(Method::Patch, api_path(&["admin", "documents", document_id, "status"])?)?
            .json(update)?;
        self.call(request)
    }

    pub fn list_orders(&self, status: Option<&str>) -> Result<Vec<Order>> {
        let query = status
            .map(|s| vec![("status".to_string(), s.to_string())])
            .unwrap_or_default();
        let request = self.authed(Method::Get, "/admin/orders")?.query(query);
        self.call(request)
    }

    pub fn list_transfers(&self, status: Option<TransferStatus>) -> Result<Vec<Transfer>> {
        let query = status
            .map(|s| vec![("status".to_string(), s.as_str().to_string())])
            .unwrap_or_default();
        let request = self.authed(Method::Get, "/admin/transfers")?.query(query);
        self.call(request)
    }

    pub fn process_transfer(
        &self,
        transfer_id: &str,
        action: TransferAction,
        notes: Option<&str>,
    ) -> Result<Transfer> {
        let request = self
            .authed(Method::Post, api_path(&["admin", "transfers", transfer_id, "process"])?)?
            .json(&ProcessTransferRequest { action, notes })?;
        self.call(request)
    }

    pub fn wallet(&self, account_id: &str) -> Result<Wallet> {
        let path = api_path(&["admin", "wallets", account_id])?;
        let request = self.authed(Method::Get, path)?;
        self.call(request)
    }

    pub fn credit_wallet(&self, account_id: &str, amount: f64, reason: &str) -> Result<Wallet> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DropCarsError::InvalidInput(format!(
                "credit amount must be positive, got {amount}"
            )));
        }
        let request = self
            .authed(Method::Post, api_path(&["admin", "wallets", account_id, "credit"])?)?
            .json(&CreditWalletRequest { amount, reason })?;
        self.call(request)
    }

    pub fn reset_password(&self, account_id: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(DropCarsError::InvalidInput("new password is empty".into()));
        }
        let request = self
            .authed(Method::Post, api_path(&["admin", "accounts", account_id, "reset-password"])?)?
            .json(&ResetPasswordRequest { new_password })?;
        let _: serde_json::Value = self.call(request)?;
        Ok(())
    }

    /// Download a resource by absolute URL (document scans).
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.transport.fetch(url)
    }

    fn authed(&self, method: Method, path: impl Into<String>) -> Result<ApiRequest> {
        let token = self.token.as_deref().ok_or(DropCarsError::NotLoggedIn)?;
        Ok(ApiRequest::new(method, path).bearer(token))
    }

    fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.transport.send(&request)?;
        if !response.is_success() {
            let err = DropCarsError::from_status(response.status, error_message(&response));
            warn!(method = %request.method, path = %request.path, "{err}");
            return Err(err);
        }
        if response.body.is_empty() {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Join path segments into an absolute API path, percent-encoding each one
/// so an id can never change which endpoint is hit.
fn api_path(segments: &[&str]) -> Result<String> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(DropCarsError::InvalidInput(format!(
            "'{bad}' is not a valid id"
        )));
    }
    let mut url = Url::parse("http://api.invalid/")
        .map_err(|e| DropCarsError::InvalidUri(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| DropCarsError::InvalidUri("base URL cannot hold a path".into()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` and
/// `{"message": "..."}`; falls back to the raw text.
pub(crate) fn error_message(response: &ApiResponse) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&response.body) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(serde_json::Value::Array(items)) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if !msgs.is_empty() {
                    return msgs.join("; ");
                }
            }
            _ => {}
        }
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    let text = String::from_utf8_lossy(&response.body).trim().to_string();
    if text.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        text
    }
}
