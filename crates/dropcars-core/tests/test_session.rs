use tempfile::TempDir;

use dropcars_core::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

fn session() -> Session {
    Session {
        access_token: "secret-token".into(),
        token_type: "bearer".into(),
        username: "ops@dropcars".into(),
    }
}

#[test]
fn test_file_store_empty_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.toml"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_file_store_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested/dir/session.toml"));
    store.save(&session()).unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().unwrap(), Some(session()));
}

#[test]
fn test_file_store_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.toml"));
    store.save(&session()).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");
    std::fs::write(&path, "access_token = ").unwrap();
    assert!(FileSessionStore::new(path).load().is_err());
}

#[test]
fn test_memory_store_lifecycle() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load().unwrap(), None);
    store.save(&session()).unwrap();
    assert_eq!(store.load().unwrap(), Some(session()));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_session_debug_redacts_token() {
    let s = format!("{:?}", session());
    assert!(!s.contains("secret-token"), "got: {s}");
    assert!(s.contains("ops@dropcars"));
}
