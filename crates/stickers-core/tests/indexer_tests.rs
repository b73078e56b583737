//! Integration tests for building and querying a sticker index through the
//! public API.

use std::sync::Arc;
use stickers_core::{
    search_stickers, IndexMode, StaticStickerSetRepository, Sticker, StickerSet,
    StickerSetIndexer,
};
use url::Url;

fn image(name: &str) -> Url {
    Url::parse(&format!("https://stickers.example.com/{name}.png")).unwrap()
}

fn two_sticker_set(first: &[&str], second: &[&str]) -> StickerSet {
    StickerSet::new(
        "test",
        vec![
            Sticker::new("sticker 1", image("1"), first.iter().copied()).unwrap(),
            Sticker::new("sticker 2", image("2"), second.iter().copied()).unwrap(),
        ],
    )
}

fn build(set: &StickerSet) -> StickerSetIndexer {
    let mut index = StickerSetIndexer::new();
    index.index_sticker_set(Some(set)).unwrap();
    index
}

fn names(stickers: &[Arc<Sticker>]) -> Vec<&str> {
    stickers.iter().map(|s| s.name()).collect()
}

#[test]
fn test_query_by_distinct_keywords() {
    let index = build(&two_sticker_set(&["key1"], &["key2"]));

    assert_eq!(
        names(&index.find_stickers_by_query(Some("key"), 0, 25)),
        vec!["sticker 1", "sticker 2"]
    );
    assert_eq!(
        names(&index.find_stickers_by_query(Some("key1"), 0, 25)),
        vec!["sticker 1"]
    );
    assert!(index
        .find_stickers_by_query(Some("not found"), 0, 25)
        .is_empty());
}

#[test]
fn test_shared_keyword_keeps_distinct_stickers() {
    let index = build(&two_sticker_set(&["key"], &["key"]));

    assert_eq!(
        names(&index.find_stickers_by_query(Some("key"), 0, 25)),
        vec!["sticker 1", "sticker 2"]
    );
}

#[test]
fn test_listing_pagination() {
    let index = build(&two_sticker_set(&["key1"], &["key2"]));

    assert_eq!(names(&index.find_stickers_by_query(None, 0, 1)), vec!["sticker 1"]);
    assert_eq!(names(&index.find_stickers_by_query(None, 1, 1)), vec!["sticker 2"]);
    assert_eq!(
        names(&index.find_stickers_by_query(None, 0, 2)),
        vec!["sticker 1", "sticker 2"]
    );
    assert_eq!(index.find_stickers_by_query(None, 0, 5).len(), 2);
    assert!(index.find_stickers_by_query(None, 5, 2).is_empty());
}

#[test]
fn test_blank_query_lists_everything() {
    let index = build(&two_sticker_set(&["key1"], &["key2"]));

    for query in [None, Some(""), Some("   "), Some("\t \n")] {
        assert_eq!(
            names(&index.find_stickers_by_query(query, 0, 25)),
            vec!["sticker 1", "sticker 2"],
            "query {query:?}"
        );
    }
}

#[test]
fn test_query_is_case_and_space_insensitive() {
    let index = build(&two_sticker_set(&["Happy"], &["SAD"]));

    assert_eq!(
        names(&index.find_stickers_by_query(Some("  HAPPY  "), 0, 25)),
        vec!["sticker 1"]
    );
    assert_eq!(
        names(&index.find_stickers_by_query(Some("sa   ha"), 0, 25)),
        vec!["sticker 1", "sticker 2"]
    );
}

#[test]
fn test_results_are_the_indexed_stickers() {
    let set = two_sticker_set(&["key"], &["key"]);
    let index = build(&set);

    let found = index.find_stickers_by_query(Some("key"), 0, 25);
    assert!(Arc::ptr_eq(&found[0], &set.stickers()[0]));
    assert!(Arc::ptr_eq(&found[1], &set.stickers()[1]));
}

#[test]
fn test_queries_are_deterministic() {
    let index = build(&StickerSet::new(
        "pack",
        vec![
            Sticker::new("wave", image("wave"), ["hello", "hi", "wave"]).unwrap(),
            Sticker::new("smile", image("smile"), ["happy", "smile"]).unwrap(),
            Sticker::new("cry", image("cry"), ["sad", "tears"]).unwrap(),
            Sticker::new("party", image("party"), ["happy", "hooray"]).unwrap(),
        ],
    ));

    let first = names(&index.find_stickers_by_query(Some("h s"), 0, 25))
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    for _ in 0..10 {
        assert_eq!(names(&index.find_stickers_by_query(Some("h s"), 0, 25)), first);
    }
    // happy: smile, party; hello: wave; hi; hooray: party; sad: cry; smile: smile
    assert_eq!(first, vec!["smile", "party", "wave", "cry"]);
}

#[test]
fn test_empty_set() {
    let index = build(&StickerSet::empty_default());

    assert!(index.is_empty());
    assert!(index.find_stickers_by_query(None, 0, 25).is_empty());
    assert!(index.find_stickers_by_query(Some("anything"), 0, 25).is_empty());
}

#[test]
fn test_accumulate_across_sets() {
    let mut index = StickerSetIndexer::with_mode(IndexMode::Accumulate);
    index
        .index_sticker_set(Some(&two_sticker_set(&["key1"], &["key2"])))
        .unwrap();
    index
        .index_sticker_set(Some(&StickerSet::new(
            "more",
            vec![Sticker::new("sticker 3", image("3"), ["key3"]).unwrap()],
        )))
        .unwrap();

    assert_eq!(
        names(&index.find_stickers_by_query(Some("key"), 0, 25)),
        vec!["sticker 1", "sticker 2", "sticker 3"]
    );
}

#[tokio::test]
async fn test_search_pipeline_builds_fresh_index() {
    let repository = StaticStickerSetRepository::new(two_sticker_set(&["key1"], &["key2"]));

    let found = search_stickers(&repository, Some("key2"), 0, 25).await.unwrap();
    assert_eq!(names(&found), vec!["sticker 2"]);

    let found = search_stickers(&repository, None, 0, 25).await.unwrap();
    assert_eq!(names(&found), vec!["sticker 1", "sticker 2"]);
}
