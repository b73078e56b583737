//! Sticker search shared by the RPC and messaging endpoints.

use crate::handlers::{get_i64_param, get_str_param};
use crate::server::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use stickers_core::{SearchConfig, Sticker};

/// Clamp caller-supplied paging values into a `(skip, count)` window.
///
/// Negative skip becomes 0. Absent count is the default page size, and count
/// is otherwise held to `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
pub(crate) fn page_window(skip: Option<i64>, count: Option<i64>) -> (usize, usize) {
    let skip = skip
        .map(|s| usize::try_from(s).unwrap_or(SearchConfig::DEFAULT_SKIP))
        .unwrap_or(SearchConfig::DEFAULT_SKIP);

    let count = match count {
        None => SearchConfig::DEFAULT_PAGE_SIZE,
        Some(c) => usize::try_from(c)
            .unwrap_or(SearchConfig::MIN_PAGE_SIZE)
            .clamp(SearchConfig::MIN_PAGE_SIZE, SearchConfig::MAX_PAGE_SIZE),
    };

    (skip, count)
}

/// Fetch, index and query with one fresh index.
pub(crate) async fn find_stickers(
    state: &AppState,
    query: Option<&str>,
    skip: Option<i64>,
    count: Option<i64>,
) -> stickers_core::Result<Vec<Arc<Sticker>>> {
    let (skip, count) = page_window(skip, count);
    stickers_core::search_stickers(state.repository.as_ref(), query, skip, count).await
}

/// `search_stickers` RPC method.
pub async fn search_stickers(state: &AppState, params: &Value) -> stickers_core::Result<Value> {
    let query = get_str_param(params, "query", "query")?;
    let skip = get_i64_param(params, "skip", "skip")?;
    let count = get_i64_param(params, "count", "count")?;

    let stickers = find_stickers(state, query, skip, count).await?;
    let stickers: Vec<&Sticker> = stickers.iter().map(|s| s.as_ref()).collect();

    Ok(json!({
        "success": true,
        "stickers": stickers
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickers_core::{Settings, StaticStickerSetRepository, StickerSet};
    use url::Url;

    fn create_test_state() -> AppState {
        let uri = Url::parse("https://cdn.example.com/s.png").unwrap();
        let set = StickerSet::new(
            "pack",
            (1..=3).map(|i| Sticker::new(format!("sticker {i}"), uri.clone(), [format!("key{i}")]).unwrap()),
        );
        AppState::new(
            Arc::new(StaticStickerSetRepository::new(set)),
            Settings::default(),
        )
    }

    #[test]
    fn test_page_window_defaults() {
        assert_eq!(page_window(None, None), (0, 25));
    }

    #[test]
    fn test_page_window_clamps() {
        assert_eq!(page_window(Some(-4), Some(10)), (0, 10));
        assert_eq!(page_window(Some(7), Some(0)), (7, 1));
        assert_eq!(page_window(None, Some(-1)), (0, 1));
        assert_eq!(page_window(None, Some(1000)), (0, 100));
    }

    #[tokio::test]
    async fn test_search_stickers_method() {
        let state = create_test_state();

        let result = search_stickers(&state, &json!({"query": "key2"})).await.unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["stickers"][0]["name"], "sticker 2");
        assert_eq!(result["stickers"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_stickers_paging() {
        let state = create_test_state();

        let result = search_stickers(&state, &json!({"skip": 1, "count": 1})).await.unwrap();
        let stickers = result["stickers"].as_array().unwrap();
        assert_eq!(stickers.len(), 1);
        assert_eq!(stickers[0]["name"], "sticker 2");
    }

    #[tokio::test]
    async fn test_search_stickers_rejects_bad_params() {
        let state = create_test_state();

        let err = search_stickers(&state, &json!({"query": ["key"]}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);
    }
}
