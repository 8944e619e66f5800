//! Store-level lifecycle scenarios.

use std::collections::HashSet;

use item_store::{Item, StoreError, CONTENT_REQUIRED};

use crate::support::immediate_store;

#[tokio::test]
async fn fresh_store_lists_nothing() {
    let store = immediate_store();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_list() {
    let store = immediate_store();

    let item = store.create("hello").await.unwrap();
    assert_eq!(item.content, "hello");
    assert!(!item.id.is_empty());

    let items = store.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.iter().filter(|i| i.content == "hello").count(), 1);
    assert_eq!(items[0], item);
}

#[tokio::test]
async fn create_then_update() {
    let store = immediate_store();
    let created = store.create("a").await.unwrap();

    let updated = store.update(&created.id, "b").await.unwrap();
    assert_eq!(updated, Item::new(created.id.clone(), "b"));

    let items = store.list().await.unwrap();
    let stored = items.iter().find(|i| i.id == created.id).unwrap();
    assert_eq!(stored.content, "b");
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
    let store = immediate_store();
    let created = store.create("a").await.unwrap();

    let first = store.update(&created.id, "same").await.unwrap();
    let second = store.update(&created.id, "same").await.unwrap();
    assert_eq!(first, second);

    let items = store.list().await.unwrap();
    assert_eq!(items, vec![Item::new(created.id, "same")]);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = immediate_store();
    let err = store.update("nonexistent-id", "x").await.unwrap_err();
    assert_eq!(err, StoreError::not_found("nonexistent-id"));
}

#[tokio::test]
async fn delete_is_final() {
    let store = immediate_store();
    let created = store.create("a").await.unwrap();

    store.delete(&created.id).await.unwrap();
    assert!(store
        .list()
        .await
        .unwrap()
        .iter()
        .all(|i| i.id != created.id));

    let err = store.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    let err = store.update(&created.id, "anything").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn blank_content_leaves_store_unchanged() {
    let store = immediate_store();
    store.create("existing").await.unwrap();
    let before = store.list().await.unwrap();

    for blank in ["", "   "] {
        let err = store.create(blank).await.unwrap_err();
        assert_eq!(err, StoreError::validation(CONTENT_REQUIRED));
    }

    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn ids_are_unique_within_a_session() {
    let store = immediate_store();
    let mut ids = HashSet::new();
    for n in 0..500 {
        let item = store.create(format!("item {n}")).await.unwrap();
        ids.insert(item.id);
    }
    assert_eq!(ids.len(), 500);
}

#[tokio::test]
async fn listing_is_stable_and_ordered() {
    let store = immediate_store();
    for content in ["first", "second", "third"] {
        store.create(content).await.unwrap();
    }

    let first = store.list().await.unwrap();
    let second = store.list().await.unwrap();
    assert_eq!(first, second);

    let contents: Vec<&str> = first.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn clones_share_one_collection() {
    let store = immediate_store();
    let handle = store.clone();

    let item = store.create("shared").await.unwrap();
    assert_eq!(handle.list().await.unwrap(), vec![item]);
}
