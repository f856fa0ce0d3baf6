//! Filter-state <-> URL query string codec.
//!
//! Each list screen owns a typed filter record (`Serialize + Deserialize +
//! Default + PartialEq`) whose non-default fields are encoded with `serde_qs`.
//! Default values are skipped on encode, so the all-default state produces an
//! empty query string and a reload restores exactly the visible state. The
//! 1-based `page` and the active `view` key travel in the same query string
//! but outside the filter record; decoders ignore keys they do not own.
//!
//! URL writes always use `history.replace_state` so that filter changes do
//! not pollute back-button history.

use contracts::shared::pagination::PageQuery;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Default, Deserialize)]
struct PageParam {
    #[serde(default)]
    page: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ViewParam {
    #[serde(default)]
    view: Option<String>,
}

pub fn encode_filter<F: Serialize>(filter: &F) -> String {
    serde_qs::to_string(filter).unwrap_or_default()
}

pub fn decode_filter<F: DeserializeOwned + Default>(query: &str) -> F {
    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
}

/// Encode a filter plus the 1-based page. Page 1 is the default and is
/// omitted.
pub fn encode_state<F: Serialize>(filter: &F, page: usize) -> String {
    let mut qs = encode_filter(filter);
    if page > 1 {
        if !qs.is_empty() {
            qs.push('&');
        }
        qs.push_str(&format!("page={}", page));
    }
    qs
}

/// Read the 1-based page from a query string. Absent or malformed values mean
/// page 1; zero is rejected the same way.
pub fn decode_page(query: &str) -> usize {
    let params: PageParam = decode_filter(query);
    params.page.filter(|p| *p >= 1).unwrap_or(1)
}

pub fn decode_view(query: &str) -> Option<String> {
    let params: ViewParam = decode_filter(query);
    params.view
}

/// Request path for a list endpoint: paging plus the filter's non-default
/// fields, encoded the same way as for the URL bar.
pub fn list_path<F: Serialize>(base: &str, filter: &F, page: PageQuery) -> String {
    let mut path = format!("{}?page={}&limit={}", base, page.page, page.limit);
    let qs = encode_filter(filter);
    if !qs.is_empty() {
        path.push('&');
        path.push_str(&qs);
    }
    path
}

fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_filter<F: DeserializeOwned + Default>() -> F {
    decode_filter(&current_query())
}

pub fn read_page() -> usize {
    decode_page(&current_query())
}

pub fn read_view() -> Option<String> {
    decode_view(&current_query())
}

/// Rewrite the location query string to `?view=<view>[&<state_qs>]` with
/// replace semantics. No-op when the URL already matches.
pub fn replace_url(view: &str, state_qs: &str) {
    let mut query = format!("?view={}", view);
    if !state_qs.is_empty() {
        query.push('&');
        query.push_str(state_qs);
    }
    if current_query() == query {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&query));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct SampleFilter {
        #[serde(skip_serializing_if = "String::is_empty")]
        status: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        search: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        from: String,
    }

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(encode_filter(&SampleFilter::default()), "");
        assert_eq!(encode_state(&SampleFilter::default(), 1), "");
    }

    #[test]
    fn test_non_default_values_round_trip() {
        let filter = SampleFilter {
            status: "active".to_string(),
            search: "acme & sons".to_string(),
            from: "2026-01-01".to_string(),
        };
        let qs = encode_filter(&filter);
        let decoded: SampleFilter = decode_filter(&qs);
        assert_eq!(decoded, filter);
    }

    #[test]
    fn test_page_is_omitted_when_one() {
        let filter = SampleFilter {
            status: "active".to_string(),
            ..Default::default()
        };
        assert_eq!(encode_state(&filter, 1), "status=active");
        assert_eq!(encode_state(&filter, 3), "status=active&page=3");
        assert_eq!(encode_state(&SampleFilter::default(), 2), "page=2");
    }

    #[test]
    fn test_decode_ignores_foreign_keys() {
        let decoded: SampleFilter = decode_filter("?view=coupons&status=active&page=4");
        assert_eq!(decoded.status, "active");
        assert_eq!(decode_page("view=coupons&status=active&page=4"), 4);
        assert_eq!(decode_view("view=coupons&page=4").as_deref(), Some("coupons"));
    }

    #[test]
    fn test_list_path_carries_paging_and_filter() {
        let filter = SampleFilter {
            status: "active".to_string(),
            ..Default::default()
        };
        let page = PageQuery { page: 2, limit: 50 };
        assert_eq!(
            list_path("/api/billing/coupons", &filter, page),
            "/api/billing/coupons?page=2&limit=50&status=active"
        );
        assert_eq!(
            list_path("/api/billing/coupons", &SampleFilter::default(), page),
            "/api/billing/coupons?page=2&limit=50"
        );
    }

    #[test]
    fn test_page_defaults_and_bounds() {
        assert_eq!(decode_page(""), 1);
        assert_eq!(decode_page("status=active"), 1);
        assert_eq!(decode_page("page=0"), 1);
        assert_eq!(decode_page("page=oops"), 1);
    }
}
