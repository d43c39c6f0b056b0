use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Storage zone convention: `(CurrentPage + 1) * PageSize < TotalItems`.
///
/// Storage zone listings report `CurrentPage` starting at 0, so the current
/// page is counted as already consumed.
pub fn has_more_storage(current_page: u32, page_size: u32, total_items: u64) -> bool {
    (u64::from(current_page) + 1) * u64::from(page_size) < total_items
}

/// Stream convention: `CurrentPage * ItemsPerPage < TotalItems`.
///
/// Stream listings count pages from 1. [`PaginatedResponse`] uses the same rule.
pub fn has_more_stream(current_page: u32, page_size: u32, total_items: u64) -> bool {
    u64::from(current_page) * u64::from(page_size) < total_items
}

/// Common list parameters.
///
/// Zero and `None` fields are left out of the query string, so the server's
/// defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub page: u32,
    pub items_per_page: u32,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl ListOptions {
    /// Query builder with `page`, `itemsPerPage`, `search` and `orderBy`.
    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .uint("page", self.page)
            .uint("itemsPerPage", self.items_per_page)
            .text("search", self.search.as_deref())
            .text("orderBy", self.order_by.as_deref())
    }
}

/// Generic one-based paginated envelope.
///
/// Accepts both `PascalCase` (`Items`, `CurrentPage`, ...) and `camelCase` keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(rename = "Items", alias = "items", default)]
    pub items: Vec<T>,
    #[serde(rename = "CurrentPage", alias = "currentPage", default)]
    pub current_page: u32,
    #[serde(rename = "TotalItems", alias = "totalItems", default)]
    pub total_items: u64,
    #[serde(rename = "ItemsPerPage", alias = "itemsPerPage", default)]
    pub items_per_page: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn has_more(&self) -> bool {
        has_more_stream(self.current_page, self.items_per_page, self.total_items)
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_items: 0,
            items_per_page: 0,
        }
    }
}

// ============ Query strings ============

/// Ordered query-string builder that drops default values.
///
/// Parameters keep insertion order and are percent-encoded. An empty builder
/// renders as the empty string and appends nothing to a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsigned number, skipped when zero.
    #[must_use]
    pub fn uint(self, key: &str, value: impl Into<u64>) -> Self {
        let value = value.into();
        if value == 0 {
            self
        } else {
            self.push(key, value.to_string())
        }
    }

    /// Signed number, skipped when zero.
    #[must_use]
    pub fn int(self, key: &str, value: impl Into<i64>) -> Self {
        let value = value.into();
        if value == 0 {
            self
        } else {
            self.push(key, value.to_string())
        }
    }

    /// String, skipped when absent or empty.
    #[must_use]
    pub fn text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.push(key, v.to_string()),
            _ => self,
        }
    }

    /// Boolean, emitted as `key=true` only when set.
    #[must_use]
    pub fn flag(self, key: &str, value: bool) -> Self {
        if value {
            self.push(key, "true".to_string())
        } else {
            self
        }
    }

    /// Any displayable value, emitted whenever present (including zero/false).
    #[must_use]
    pub fn opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v.to_string()),
            None => self,
        }
    }

    /// Repeated key, one pair per element.
    #[must_use]
    pub fn list<V: ToString>(self, key: &str, values: &[V]) -> Self {
        values
            .iter()
            .fold(self, |q, v| q.push(key, v.to_string()))
    }

    fn push(mut self, key: &str, value: String) -> Self {
        self.pairs.push((key.to_string(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded `k=v&k=v` without a leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append to `path`, using `&` when it already has a query string.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{path}{sep}{}", self.encode())
    }
}

/// Percent-encode a single path segment (names, UUIDs from callers).
pub(crate) fn path_escape(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
