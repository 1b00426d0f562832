use dropcars_core::api::{Account, AccountFilter, Document, DocumentStatusUpdate};
use dropcars_core::io::DecodedImage;
use dropcars_core::transform::ContentSize;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    Login { username: String, password: String },

    /// Drop the token and the stored session.
    Logout,

    LoadAccounts { filter: AccountFilter },

    LoadDocuments { account_id: String },

    SetDocumentStatus {
        document_id: String,
        update: DocumentStatusUpdate,
    },

    /// Fetch and decode an image from a URL, `file://` URI, or local path.
    LoadImage { uri: String },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Sent once at startup after config and session are read.
    Ready {
        base_url: String,
        username: Option<String>,
        viewer: ContentSize,
    },
    LoggedIn {
        username: String,
    },
    LoggedOut,
    Accounts {
        accounts: Vec<Account>,
    },
    Documents {
        account_id: String,
        documents: Vec<Document>,
    },
    DocumentUpdated {
        document: Document,
    },
    ImageLoaded {
        uri: String,
        image: DecodedImage,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
