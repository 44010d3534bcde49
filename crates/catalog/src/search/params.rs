//! Request parameters for the suggestion and search endpoints.

use serde::{Deserialize, Serialize};

use crate::catalog::item::non_blank;
use crate::error::{CatalogError, Result};

/// Default number of suggestions and search hits returned.
pub const DEFAULT_RESULT_SIZE: usize = 10;

/// Upper bound on suggestions per request.
pub const MAX_SUGGEST_SIZE: usize = 100;

/// Parameters of a suggestion lookup.
///
/// Deserialization applies the same checks as [`SuggestParams::new`] and
/// [`SuggestParams::with_size`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawSuggestParams")]
pub struct SuggestParams {
    /// Prefix typed so far.
    pub keyword: String,
    /// Maximum number of suggestions.
    pub size: usize,
    /// Collapse identical suggestion texts.
    pub skip_duplicates: bool,
}

impl SuggestParams {
    /// Create parameters for a keyword; blank keywords are rejected.
    pub fn new(keyword: impl Into<String>) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(CatalogError::EmptyKeyword);
        }
        Ok(Self {
            keyword,
            size: DEFAULT_RESULT_SIZE,
            skip_duplicates: true,
        })
    }

    /// Set the maximum number of suggestions.
    pub fn with_size(mut self, size: usize) -> Result<Self> {
        if size == 0 || size > MAX_SUGGEST_SIZE {
            return Err(CatalogError::InvalidSize(size));
        }
        self.size = size;
        Ok(self)
    }

    /// Cache key for the suggestion list.
    pub fn cache_key(&self) -> &str {
        &self.keyword
    }
}

#[derive(Deserialize)]
struct RawSuggestParams {
    keyword: String,
    #[serde(default = "default_size")]
    size: usize,
    #[serde(default = "default_skip_duplicates")]
    skip_duplicates: bool,
}

fn default_size() -> usize {
    DEFAULT_RESULT_SIZE
}

fn default_skip_duplicates() -> bool {
    true
}

impl TryFrom<RawSuggestParams> for SuggestParams {
    type Error = CatalogError;

    fn try_from(raw: RawSuggestParams) -> Result<Self> {
        let mut params = SuggestParams::new(raw.keyword)?.with_size(raw.size)?;
        params.skip_duplicates = raw.skip_duplicates;
        Ok(params)
    }
}

/// Parameters of a product search.
///
/// Blank values are normalised to `None`, whether set through the builder,
/// a query string or deserialization; with no keyword every product
/// matches and brand/category act as filters only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawSearchParams")]
pub struct SearchParams {
    /// Matched against name, brand and category.
    pub keyword: Option<String>,
    /// Exact brand filter.
    pub brand: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = normalise(keyword);
        self
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = normalise(brand);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = normalise(category);
        self
    }

    /// Parse from a URL query string such as `keyword=air&brand=RIMOWA`.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = Self::new();

        for (key, value) in url::form_urlencoded::parse(qs.trim_start_matches('?').as_bytes()) {
            match &*key {
                "keyword" => params.keyword = normalise(&value),
                "brand" => params.brand = normalise(&value),
                "category" => params.category = normalise(&value),
                _ => {}
            }
        }

        params
    }

    /// True when no keyword restricts the result set.
    pub fn is_match_all(&self) -> bool {
        self.keyword.is_none()
    }

    /// Number of hits a search returns.
    pub fn result_size(&self) -> usize {
        DEFAULT_RESULT_SIZE
    }

    /// Cache key: `keyword-brand-category`, absent parts left empty.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.keyword.as_deref().unwrap_or(""),
            self.brand.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or("")
        )
    }
}

#[derive(Deserialize)]
struct RawSearchParams {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<RawSearchParams> for SearchParams {
    fn from(raw: RawSearchParams) -> Self {
        Self {
            keyword: raw.keyword.as_deref().and_then(normalise),
            brand: raw.brand.as_deref().and_then(normalise),
            category: raw.category.as_deref().and_then(normalise),
        }
    }
}

fn normalise(value: &str) -> Option<String> {
    non_blank(Some(value)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_rejects_blank_keyword() {
        assert!(matches!(SuggestParams::new("  "), Err(CatalogError::EmptyKeyword)));
    }

    #[test]
    fn test_suggest_defaults() {
        let params = SuggestParams::new("sal").unwrap();
        assert_eq!(params.size, 10);
        assert!(params.skip_duplicates);
        assert_eq!(params.cache_key(), "sal");
    }

    #[test]
    fn test_suggest_size_bounds() {
        let params = SuggestParams::new("sal").unwrap();
        assert_eq!(params.clone().with_size(25).unwrap().size, 25);
        assert!(matches!(params.clone().with_size(0), Err(CatalogError::InvalidSize(0))));
        assert!(params.with_size(MAX_SUGGEST_SIZE + 1).is_err());
    }

    #[test]
    fn test_suggest_deserialize_applies_checks() {
        let blank = serde_json::from_value::<SuggestParams>(serde_json::json!({
            "keyword": "",
            "size": 5,
        }));
        assert!(blank.is_err());

        let zero = serde_json::from_value::<SuggestParams>(serde_json::json!({
            "keyword": "sal",
            "size": 0,
            "skip_duplicates": true,
        }));
        assert!(zero.is_err());

        let params: SuggestParams = serde_json::from_value(serde_json::json!({
            "keyword": "sal",
            "skip_duplicates": false,
        }))
        .unwrap();
        assert_eq!(params.size, DEFAULT_RESULT_SIZE);
        assert!(!params.skip_duplicates);
    }

    #[test]
    fn test_search_deserialize_normalises_blanks() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({
            "keyword": "  ",
            "brand": "",
            "category": " 拉杆箱 ",
        }))
        .unwrap();

        assert_eq!(params.keyword, None);
        assert_eq!(params.brand, None);
        assert_eq!(params.category.as_deref(), Some("拉杆箱"));
        assert!(params.is_match_all());
        assert_eq!(params.cache_key(), "--拉杆箱");

        let empty: SearchParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty, SearchParams::new());
    }

    #[test]
    fn test_search_normalises_blanks() {
        let params = SearchParams::new()
            .with_keyword("  ")
            .with_brand(" RIMOWA ")
            .with_category("");

        assert!(params.is_match_all());
        assert_eq!(params.brand.as_deref(), Some("RIMOWA"));
        assert_eq!(params.category, None);
        assert_eq!(params.cache_key(), "-RIMOWA-");
    }

    #[test]
    fn test_search_from_query_string() {
        let params = SearchParams::from_query_string("?keyword=salsa+air&category=%E6%8B%89%E6%9D%86%E7%AE%B1&page=2");

        assert_eq!(params.keyword.as_deref(), Some("salsa air"));
        assert_eq!(params.brand, None);
        assert_eq!(params.category.as_deref(), Some("拉杆箱"));
        assert!(!params.is_match_all());
        assert_eq!(params.cache_key(), "salsa air--拉杆箱");
        assert_eq!(params.result_size(), 10);
    }
}
