mod common;

use serde_json::json;

use common::{authed_client, RecordingTransport};
use dropcars_core::api::{
    AccountFilter, AccountStatus, AccountType, ApiClient, DocumentStatus, DocumentStatusUpdate,
    Method, TransferAction, TransferStatus,
};
use dropcars_core::error::{DropCarsError, Recovery};

const ACCOUNTS_JSON: &str = r#"[
  {"id": "v1", "name": "Sai Travels", "phone": "9000000001", "account_type": "vendor", "status": "pending"},
  {"id": "d7", "name": "Ravi", "account_type": "driver", "status": "active", "created_at": "2024-05-01T10:00:00Z"}
]"#;

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[test]
fn test_login_stores_token_and_returns_session() {
    let transport =
        RecordingTransport::new().respond(200, r#"{"access_token": "abc", "token_type": "bearer"}"#);
    let mut client = ApiClient::new(transport);
    assert!(!client.is_authenticated());

    let session = client.login("ops", "secret").unwrap();
    assert_eq!(session.access_token, "abc");
    assert_eq!(session.username, "ops");
    assert!(client.is_authenticated());

    let req = client.transport().last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.bearer, None);
    assert_eq!(req.body, Some(json!({"username": "ops", "password": "secret"})));
}

#[test]
fn test_login_defaults_token_type() {
    let transport = RecordingTransport::new().respond(200, r#"{"access_token": "abc"}"#);
    let mut client = ApiClient::new(transport);
    let session = client.login("ops", "pw").unwrap();
    assert_eq!(session.token_type, "bearer");
}

#[test]
fn test_calls_without_token_fail_before_sending() {
    let client = ApiClient::new(RecordingTransport::new());
    let err = client.list_accounts(&AccountFilter::default()).unwrap_err();
    assert!(matches!(err, DropCarsError::NotLoggedIn));
    assert_eq!(err.recovery(), Recovery::Logout);
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_unauthorized_response_maps_to_logout() {
    let transport = RecordingTransport::new().respond(401, r#"{"detail": "Token expired"}"#);
    let client = authed_client(transport);
    let err = client.list_orders(None).unwrap_err();
    match &err {
        DropCarsError::Unauthorized { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Token expired");
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert!(err.is_auth());
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[test]
fn test_list_accounts_sends_bearer_and_filters() {
    let transport = RecordingTransport::new().respond(200, ACCOUNTS_JSON);
    let client = authed_client(transport);

    let filter = AccountFilter {
        account_type: Some(AccountType::VehicleOwner),
        status: Some(AccountStatus::Pending),
    };
    let accounts = client.list_accounts(&filter).unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].account_type, AccountType::Vendor);
    assert_eq!(accounts[1].created_at.as_deref(), Some("2024-05-01T10:00:00Z"));

    let req = client.transport().last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/admin/accounts");
    assert_eq!(req.bearer.as_deref(), Some("tok-123"));
    assert_eq!(
        req.query,
        vec![
            ("account_type".to_string(), "vehicle_owner".to_string()),
            ("status".to_string(), "pending".to_string()),
        ]
    );
}

#[test]
fn test_list_accounts_without_filter_sends_no_query() {
    let transport = RecordingTransport::new().respond(200, "[]");
    let client = authed_client(transport);
    let accounts = client.list_accounts(&AccountFilter::default()).unwrap();
    assert!(accounts.is_empty());
    assert!(client.transport().last_request().query.is_empty());
}

#[test]
fn test_set_account_status_patches() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"id": "v1", "name": "Sai Travels", "account_type": "vendor", "status": "blocked"}"#,
    );
    let client = authed_client(transport);
    let account = client.set_account_status("v1", AccountStatus::Blocked).unwrap();
    assert_eq!(account.status, AccountStatus::Blocked);

    let req = client.transport().last_request();
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.path, "/admin/accounts/v1/status");
    assert_eq!(req.body, Some(json!({"status": "blocked"})));
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[test]
fn test_set_document_status_with_reason() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"id": "doc9", "account_id": "d7", "document_type": "licence",
            "image_url": "https://cdn.example/doc9.jpg", "status": "invalid", "reason": "blurry"}"#,
    );
    let client = authed_client(transport);
    let update = DocumentStatusUpdate {
        status: DocumentStatus::Invalid,
        reason: Some("blurry".into()),
    };
    let doc = client.set_document_status("doc9", &update).unwrap();
    assert_eq!(doc.status, DocumentStatus::Invalid);

    let req = client.transport().last_request();
    assert_eq!(req.path, "/admin/documents/doc9/status");
    assert_eq!(req.body, Some(json!({"status": "invalid", "reason": "blurry"})));
}

#[test]
fn test_set_document_status_omits_missing_reason() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"id": "doc9", "account_id": "d7", "document_type": "rc",
            "image_url": "x.png", "status": "verified"}"#,
    );
    let client = authed_client(transport);
    let update = DocumentStatusUpdate {
        status: DocumentStatus::Verified,
        reason: None,
    };
    client.set_document_status("doc9", &update).unwrap();
    assert_eq!(
        client.transport().last_request().body,
        Some(json!({"status": "verified"}))
    );
}

#[test]
fn test_list_documents_path() {
    let transport = RecordingTransport::new().respond(200, "[]");
    let client = authed_client(transport);
    client.list_documents("d7").unwrap();
    assert_eq!(
        client.transport().last_request().path,
        "/admin/accounts/d7/documents"
    );
}

#[test]
fn test_ids_are_percent_encoded_in_paths() {
    let transport = RecordingTransport::new().respond(200, "[]");
    let client = authed_client(transport);
    client.list_documents("a/b?c#d e").unwrap();
    assert_eq!(
        client.transport().last_request().path,
        "/admin/accounts/a%2Fb%3Fc%23d%20e/documents"
    );
}

#[test]
fn test_dot_and_empty_ids_are_rejected() {
    let client = authed_client(RecordingTransport::new());
    for id in ["", ".", ".."] {
        let err = client.wallet(id).unwrap_err();
        assert!(matches!(err, DropCarsError::InvalidInput(_)), "id {id:?}: {err}");
    }
    assert!(client.transport().requests().is_empty());
}

// ---------------------------------------------------------------------------
// Transfers, wallets, passwords
// ---------------------------------------------------------------------------

#[test]
fn test_list_transfers_filters_by_status() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"[{"id": "t1", "account_id": "v1", "amount": 1500.0, "status": "pending"}]"#,
    );
    let client = authed_client(transport);
    let transfers = client.list_transfers(Some(TransferStatus::Pending)).unwrap();
    assert_eq!(transfers[0].amount, 1500.0);
    assert_eq!(
        client.transport().last_request().query,
        vec![("status".to_string(), "pending".to_string())]
    );
}

#[test]
fn test_process_transfer_posts_action() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"id": "t1", "account_id": "v1", "amount": 1500.0, "status": "approved"}"#,
    );
    let client = authed_client(transport);
    let transfer = client
        .process_transfer("t1", TransferAction::Approve, Some("paid via NEFT"))
        .unwrap();
    assert_eq!(transfer.status, TransferStatus::Approved);

    let req = client.transport().last_request();
    assert_eq!(req.path, "/admin/transfers/t1/process");
    assert_eq!(
        req.body,
        Some(json!({"action": "approve", "notes": "paid via NEFT"}))
    );
}

#[test]
fn test_credit_wallet_rejects_non_positive_amounts() {
    let client = authed_client(RecordingTransport::new());
    for amount in [0.0, -5.0, f64::NAN] {
        let err = client.credit_wallet("v1", amount, "bonus").unwrap_err();
        assert!(matches!(err, DropCarsError::InvalidInput(_)));
    }
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_credit_wallet_returns_new_balance() {
    let transport = RecordingTransport::new()
        .respond(200, r#"{"account_id": "v1", "balance": 2500.5, "currency": "INR"}"#);
    let client = authed_client(transport);
    let wallet = client.credit_wallet("v1", 500.5, "refund").unwrap();
    assert_eq!(wallet.balance, 2500.5);

    let req = client.transport().last_request();
    assert_eq!(req.path, "/admin/wallets/v1/credit");
    assert_eq!(req.body, Some(json!({"amount": 500.5, "reason": "refund"})));
}

#[test]
fn test_reset_password_accepts_empty_body() {
    let transport = RecordingTransport::new().respond(204, "");
    let client = authed_client(transport);
    client.reset_password("d7", "n3w-pass").unwrap();
    assert_eq!(
        client.transport().last_request().path,
        "/admin/accounts/d7/reset-password"
    );
}

#[test]
fn test_reset_password_rejects_empty_password() {
    let client = authed_client(RecordingTransport::new());
    assert!(client.reset_password("d7", "").is_err());
}

// ---------------------------------------------------------------------------
// Error bodies
// ---------------------------------------------------------------------------

#[test]
fn test_server_error_is_retryable() {
    let transport = RecordingTransport::new().respond(503, "upstream unavailable");
    let client = authed_client(transport);
    let err = client.wallet("v1").unwrap_err();
    assert_eq!(err.recovery(), Recovery::Retry);
    assert!(err.to_string().contains("upstream unavailable"), "got: {err}");
}

#[test]
fn test_validation_error_lists_messages() {
    let transport = RecordingTransport::new().respond(
        422,
        r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"}, {"msg": "bad reason"}]}"#,
    );
    let client = authed_client(transport);
    let err = client.credit_wallet("v1", 10.0, "x").unwrap_err();
    match err {
        DropCarsError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "field required; bad reason");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_message_field_and_empty_body() {
    let transport = RecordingTransport::new()
        .respond(404, r#"{"message": "Transfer not found"}"#)
        .respond(400, "");
    let client = authed_client(transport);

    let err = client.process_transfer("t404", TransferAction::Reject, None).unwrap_err();
    assert!(err.to_string().contains("Transfer not found"));
    assert_eq!(err.recovery(), Recovery::Report);

    let err = client.list_orders(Some("completed")).unwrap_err();
    assert!(err.to_string().contains("HTTP 400"), "got: {err}");
}
