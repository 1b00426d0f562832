mod client;
mod transport;
pub mod types;

pub use client::ApiClient;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use types::{
    Account, AccountFilter, AccountStatus, AccountType, Document, DocumentStatus,
    DocumentStatusUpdate, Order, Transfer, TransferAction, TransferStatus, Wallet,
};
