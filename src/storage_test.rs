use super::*;

#[test]
fn new_storage_is_empty() {
    assert_eq!(MemoryStorage::new().load(), None);
}

#[test]
fn save_then_load_returns_token() {
    let storage = MemoryStorage::new();
    storage.save("tok-1");
    assert_eq!(storage.load().as_deref(), Some("tok-1"));
}

#[test]
fn clear_removes_token() {
    let storage = MemoryStorage::with_token("tok-1");
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn empty_token_loads_as_none() {
    let storage = MemoryStorage::with_token("");
    assert_eq!(storage.load(), None);
}

#[test]
fn clones_share_the_slot() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.save("shared");
    assert_eq!(other.load().as_deref(), Some("shared"));
    other.clear();
    assert_eq!(storage.load(), None);
}
