//! Tests for the in-memory shard collection and settings lookup.

use mediadex_core::{ChatSettings, Media, MediaBuilder, MediaFilter, SearchPattern};
use mediadex_store::{InMemoryCollection, InMemorySettings, MediaCollection, SettingsLookup};

fn media(file_id: &str, name: &str) -> Media {
    MediaBuilder::default()
        .file_id(file_id)
        .file_name(name)
        .file_size(1_i64)
        .build()
        .unwrap()
}

fn match_all() -> MediaFilter {
    MediaFilter::new(SearchPattern::new("", "", "").unwrap(), false, None)
}

fn word(w: &str) -> MediaFilter {
    let pattern = SearchPattern::new(
        w,
        &format!(r"(?:\b|[.+\-_]){w}(?:\b|[.+\-_])"),
        format!(r"(\y|[.+\-_]){w}(\y|[.+\-_])"),
    )
    .unwrap();
    MediaFilter::new(pattern, false, None)
}

#[tokio::test]
async fn test_insert_and_len() {
    let shard = InMemoryCollection::new();
    assert!(shard.is_empty().await.unwrap());

    shard.insert(&media("a", "first.mkv")).await.unwrap();
    shard.insert(&media("b", "second.mkv")).await.unwrap();

    assert_eq!(shard.len().await.unwrap(), 2);
    assert_eq!(shard.backend_name(), "memory");
}

#[tokio::test]
async fn test_duplicate_key_rejected_without_change() {
    let shard = InMemoryCollection::new();
    shard.insert(&media("a", "first.mkv")).await.unwrap();

    let err = shard.insert(&media("a", "other.mkv")).await.unwrap_err();
    assert!(err.is_duplicate_key());
    assert_eq!(shard.len().await.unwrap(), 1);

    let found = shard.find(&match_all(), 0, 10).await.unwrap();
    assert_eq!(found[0].file_name(), "first mkv");
}

#[tokio::test]
async fn test_find_is_newest_first_with_skip_and_limit() {
    let shard = InMemoryCollection::new();
    for i in 0..5 {
        shard
            .insert(&media(&format!("id{i}"), &format!("cat_{i}.mp4")))
            .await
            .unwrap();
    }

    let ids: Vec<String> = shard
        .find(&word("cat"), 1, 2)
        .await
        .unwrap()
        .iter()
        .map(|m| m.file_id().clone())
        .collect();

    assert_eq!(ids, vec!["id3", "id2"]);
}

#[tokio::test]
async fn test_count_applies_filter() {
    let shard = InMemoryCollection::new();
    shard.insert(&media("a", "my_cat.mp4")).await.unwrap();
    shard.insert(&media("b", "concatenate.mp4")).await.unwrap();

    assert_eq!(shard.count(&word("cat")).await.unwrap(), 1);
    assert_eq!(shard.count(&match_all()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_clear_empties_collection() {
    let shard = InMemoryCollection::new();
    shard.insert(&media("a", "x.mkv")).await.unwrap();
    shard.clear().await;

    assert!(shard.is_empty().await.unwrap());
    shard.insert(&media("a", "x.mkv")).await.unwrap();
}

#[tokio::test]
async fn test_settings_default_for_unknown_chat() {
    let settings = InMemorySettings::new();
    settings.set(-100, ChatSettings { max_btn: true }).await;

    assert!(settings.get_settings(-100).await.unwrap().max_btn);
    assert!(!settings.get_settings(42).await.unwrap().max_btn);
}
