use std::fs;

use larder_engine::FavoritesStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::new(dir.path().join("favorites.json"))
}

#[test]
fn missing_file_is_an_empty_set() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);

    assert!(store.list().is_empty());
    assert!(!store.is_favorite("52772"));
}

#[test]
fn toggle_adds_then_removes() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);

    let membership = store.toggle("52772").expect("toggle");
    assert_eq!(membership, vec!["52772".to_string()]);
    assert!(store.is_favorite("52772"));

    let membership = store.toggle("52772").expect("toggle");
    assert!(membership.is_empty());
    assert!(!store.is_favorite("52772"));
}

#[test]
fn membership_survives_reopening_the_store() {
    let dir = TempDir::new().expect("tempdir");
    {
        let store = store_in(&dir);
        store.toggle("52772").expect("toggle");
        store.toggle("52893").expect("toggle");
    }

    let reopened = store_in(&dir);
    assert_eq!(
        reopened.list(),
        vec!["52772".to_string(), "52893".to_string()]
    );
}

#[test]
fn removal_preserves_the_order_of_the_rest() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    store.toggle("1").expect("toggle");
    store.toggle("2").expect("toggle");
    store.toggle("3").expect("toggle");

    let membership = store.toggle("2").expect("toggle");
    assert_eq!(membership, vec!["1".to_string(), "3".to_string()]);
}

#[test]
fn value_on_disk_is_a_json_id_array() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    store.toggle("52772").expect("toggle");

    let content =
        fs::read_to_string(dir.path().join("favorites.json")).expect("favorites file");
    assert_eq!(content, r#"["52772"]"#);
}

#[test]
fn corrupt_file_degrades_to_empty_and_recovers_on_write() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("favorites.json");
    fs::write(&path, "not json").expect("write corrupt file");

    let store = store_in(&dir);
    assert!(store.list().is_empty());

    // The next toggle rewrites the file from the degraded (empty) set.
    let membership = store.toggle("52772").expect("toggle");
    assert_eq!(membership, vec!["52772".to_string()]);
    assert_eq!(store.list(), vec!["52772".to_string()]);
}

#[test]
fn double_toggle_restores_the_previous_value() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    store.toggle("1").expect("toggle");
    store.toggle("2").expect("toggle");
    let before = store.list();

    store.toggle("3").expect("toggle");
    store.toggle("3").expect("toggle");
    assert_eq!(store.list(), before);
}
