use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TOKEN_TYPE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Vendor,
    VehicleOwner,
    Driver,
    #[serde(other)]
    Unknown,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [Self::Vendor, Self::VehicleOwner, Self::Driver];

    /// Wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::VehicleOwner => "vehicle_owner",
            Self::Driver => "driver",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vendor => write!(f, "Vendor"),
            Self::VehicleOwner => write!(f, "Vehicle Owner"),
            Self::Driver => write!(f, "Driver"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 4] = [Self::Active, Self::Inactive, Self::Pending, Self::Blocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Blocked => "blocked",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
            Self::Pending => write!(f, "Pending"),
            Self::Blocked => write!(f, "Blocked"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Invalid,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Verified => write!(f, "Verified"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Operator decision on a pending transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferAction {
    Approve,
    Reject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub account_type: AccountType,
    pub status: AccountStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub account_id: String,
    pub document_type: String,
    /// Resolvable URI of the scanned document.
    pub image_url: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub pickup: Option<String>,
    #[serde(default)]
    pub drop: Option<String>,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    pub status: TransferStatus,
    #[serde(default)]
    pub requested_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub account_id: String,
    pub balance: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Server-side filter for the account list. `None` means "any".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountFilter {
    pub account_type: Option<AccountType>,
    pub status: Option<AccountStatus>,
}

impl AccountFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.account_type {
            query.push(("account_type".to_string(), kind.as_str().to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        query
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct AccountStatusUpdate {
    pub status: AccountStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentStatusUpdate {
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ProcessTransferRequest<'a> {
    pub action: TransferAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct CreditWalletRequest<'a> {
    pub amount: f64,
    pub reason: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub new_password: &'a str,
}
