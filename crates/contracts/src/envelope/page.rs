use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EnvelopeError;

/// Pagination descriptor attached to every list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub current_page: u64,
    pub limit_per_page: u64,
    pub page_count: u64,
    pub item_count: u64,
}

impl PageMetadata {
    /// Check the invariants the backend promises for every page:
    /// `pageCount == ceil(itemCount / limitPerPage)` and the current page
    /// never lies past the last one.
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.limit_per_page == 0 {
            return Err(EnvelopeError::MalformedMetadata(
                "limitPerPage must be positive".to_string(),
            ));
        }
        if self.current_page == 0 {
            return Err(EnvelopeError::MalformedMetadata(
                "currentPage must be at least 1".to_string(),
            ));
        }
        let expected = self.item_count.div_ceil(self.limit_per_page);
        if self.page_count != expected {
            return Err(EnvelopeError::MalformedMetadata(format!(
                "pageCount {} does not match ceil({} / {}) = {}",
                self.page_count, self.item_count, self.limit_per_page, expected
            )));
        }
        // An empty collection still serves page 1.
        if self.current_page > self.page_count.max(1) {
            return Err(EnvelopeError::MalformedMetadata(format!(
                "currentPage {} is past the last page {}",
                self.current_page,
                self.page_count.max(1)
            )));
        }
        Ok(())
    }
}

/// One page of a list endpoint. On the wire the items travel under `data`,
/// next to their `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode the `data` object of a successful list envelope.
    pub(crate) fn from_value(data: &Value) -> Result<Self, EnvelopeError> {
        let raw_items = data.get("data").ok_or_else(|| {
            EnvelopeError::MalformedPayload("list payload without a `data` array".to_string())
        })?;
        let items: Vec<T> = serde_json::from_value(raw_items.clone())
            .map_err(|e| EnvelopeError::MalformedPayload(e.to_string()))?;

        let raw_metadata = data.get("metadata").ok_or_else(|| {
            EnvelopeError::MalformedMetadata("list payload without a `metadata` object".to_string())
        })?;
        let metadata: PageMetadata = serde_json::from_value(raw_metadata.clone())
            .map_err(|e| EnvelopeError::MalformedMetadata(e.to_string()))?;
        metadata.validate()?;

        Ok(Self { items, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(current_page: u64, limit_per_page: u64, page_count: u64, item_count: u64) -> PageMetadata {
        PageMetadata {
            current_page,
            limit_per_page,
            page_count,
            item_count,
        }
    }

    #[test]
    fn consistent_metadata_validates() {
        assert!(metadata(1, 10, 1, 1).validate().is_ok());
        assert!(metadata(3, 10, 3, 25).validate().is_ok());
        // itemCount an exact multiple of the limit
        assert!(metadata(2, 10, 2, 20).validate().is_ok());
        // empty collection: page 1 of 0 pages
        assert!(metadata(1, 10, 0, 0).validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = metadata(1, 0, 0, 0).validate().unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedMetadata(_)));
    }

    #[test]
    fn zero_current_page_is_rejected() {
        let err = metadata(0, 10, 1, 5).validate().unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedMetadata(_)));
    }

    #[test]
    fn wrong_page_count_is_rejected() {
        let err = metadata(1, 10, 5, 1).validate().unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedMetadata(_)));
    }

    #[test]
    fn current_page_past_the_end_is_rejected() {
        let err = metadata(4, 10, 3, 25).validate().unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedMetadata(_)));
    }

    #[test]
    fn missing_metadata_field_is_rejected() {
        let data = json!({
            "data": [],
            "metadata": { "currentPage": 1, "limitPerPage": 10, "pageCount": 0 }
        });
        let result: Result<Page<Value>, _> = Page::from_value(&data);
        assert!(matches!(result, Err(EnvelopeError::MalformedMetadata(_))));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let data = json!({
            "data": [],
            "metadata": {
                "currentPage": 1,
                "limitPerPage": 10,
                "pageCount": 0,
                "itemCount": -1
            }
        });
        let result: Result<Page<Value>, _> = Page::from_value(&data);
        assert!(matches!(result, Err(EnvelopeError::MalformedMetadata(_))));
    }

    #[test]
    fn non_array_items_are_rejected() {
        let data = json!({
            "data": { "id": 1 },
            "metadata": {
                "currentPage": 1,
                "limitPerPage": 10,
                "pageCount": 1,
                "itemCount": 1
            }
        });
        let result: Result<Page<Value>, _> = Page::from_value(&data);
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));
    }

    #[test]
    fn metadata_uses_camel_case_on_the_wire() {
        let value = serde_json::to_value(metadata(1, 10, 1, 1)).unwrap();
        assert_eq!(
            value,
            json!({ "currentPage": 1, "limitPerPage": 10, "pageCount": 1, "itemCount": 1 })
        );
    }
}
