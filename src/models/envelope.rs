//! The two wire envelopes every response is wrapped in.
//!
//! Field names follow the live API exactly (`data`, `errorCode`, `errorMsg`,
//! `datas`, `curPage`, `over`, ...).

use serde::{Deserialize, Serialize};

/// Outer envelope of every response. Success iff `error_code == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload; `null` on failures and on some empty successes.
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    #[serde(rename = "errorCode")]
    pub error_code: i32,

    #[serde(rename = "errorMsg", default)]
    pub error_msg: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error_code: 0,
            error_msg: String::new(),
        }
    }

    pub fn failure(error_code: i32, error_msg: impl Into<String>) -> Self {
        Self {
            data: None,
            error_code,
            error_msg: error_msg.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }
}

/// One page of records plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedEnvelope<T> {
    /// Records in server order.
    #[serde(rename = "datas", default = "Vec::new")]
    pub items: Vec<T>,

    /// Page number as reported by the server.
    #[serde(rename = "curPage", default)]
    pub current_page: i64,

    /// Index of the first record of this page within the whole list.
    #[serde(default)]
    pub offset: i64,

    /// Set on the last page.
    #[serde(rename = "over", default)]
    pub is_last_page: bool,

    #[serde(rename = "pageCount", default)]
    pub page_count: i64,

    #[serde(rename = "size", default)]
    pub page_size: i64,

    #[serde(rename = "total", default)]
    pub total_items: i64,
}

impl<T> PagedEnvelope<T> {
    /// A final, empty page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            offset: 0,
            is_last_page: true,
            page_count: 0,
            page_size: 0,
            total_items: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when this page starts the list.
    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    pub fn has_more(&self) -> bool {
        !self.is_last_page
    }
}
