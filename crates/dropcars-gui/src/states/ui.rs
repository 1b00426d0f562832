use dropcars_core::api::{Account, AccountStatus, AccountType, Document};

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub base_url: String,

    /// Login form.
    pub username: String,
    pub password: String,
    pub logged_in_as: Option<String>,

    /// What the worker is doing right now (None = idle).
    pub running: Option<String>,

    /// Account list and its filter.
    pub type_filter: Option<AccountType>,
    pub status_filter: Option<AccountStatus>,
    pub accounts: Vec<Account>,
    pub selected_account: Option<String>,

    /// Documents of the selected account.
    pub documents: Vec<Document>,
    pub selected_document: Option<String>,
    pub reject_reason: String,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn selected_document(&self) -> Option<&Document> {
        let id = self.selected_document.as_deref()?;
        self.documents.iter().find(|d| d.id == id)
    }

    /// Replace a document in the list after the server confirmed an update.
    pub fn replace_document(&mut self, document: Document) {
        if let Some(slot) = self.documents.iter_mut().find(|d| d.id == document.id) {
            *slot = document;
        }
    }

    /// Forget everything that was fetched with the old token.
    pub fn clear_session_data(&mut self) {
        self.logged_in_as = None;
        self.accounts.clear();
        self.selected_account = None;
        self.documents.clear();
        self.selected_document = None;
        self.reject_reason.clear();
    }
}
