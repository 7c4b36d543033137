use serde::{Deserialize, Serialize};

/// Outcome of a single remote operation.
///
/// `message` is only populated on failure, and `object` is absent whenever the operation
/// produced no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult<T = ()> {
    pub was_successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<T>,
}

impl<T> ItemResult<T> {
    pub fn success(object: T) -> Self {
        Self {
            was_successful: true,
            message: None,
            object: Some(object),
        }
    }

    pub fn ok() -> Self {
        Self {
            was_successful: true,
            message: None,
            object: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            was_successful: false,
            message: Some(message.into()),
            object: None,
        }
    }
}

/// Paged outcome of an entity list operation.
///
/// Rejections raised before the list runs carry a plain `ItemResult` body, so the paging
/// fields decode as zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub was_successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> ListResult<T> {
    pub fn page(list: Vec<T>, page: u64, page_size: u64, total_count: u64) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };

        Self {
            was_successful: true,
            message: None,
            list: Some(list),
            page,
            page_size,
            page_count,
            total_count,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            was_successful: false,
            message: Some(message.into()),
            list: None,
            page: 0,
            page_size: 0,
            page_count: 0,
            total_count: 0,
        }
    }
}
