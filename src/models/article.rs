//! Article and banner records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Shown when neither author nor sharing user is set.
pub const ANONYMOUS: &str = "anonymous";

/// An article from the home feed, the square, the daily question list or a
/// navigation group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Set instead of `author` for articles shared on the square.
    #[serde(default)]
    pub share_user: String,
    #[serde(default)]
    pub super_chapter_name: String,
    #[serde(default)]
    pub chapter_name: String,
    /// Server-formatted relative date ("1小时前", "2024-01-15").
    #[serde(default)]
    pub nice_date: String,
    /// Publish time in milliseconds since the epoch.
    #[serde(default)]
    pub publish_time: Option<i64>,
    #[serde(default)]
    pub fresh: bool,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub collect: bool,
}

impl Article {
    /// Author, falling back to the sharing user.
    pub fn author_name(&self) -> &str {
        display_author(&self.author, &self.share_user)
    }

    /// `super · chapter` when both are set, else whichever is.
    pub fn category_label(&self) -> String {
        category_label(&self.super_chapter_name, &self.chapter_name)
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_time
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// A home-screen banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub is_visible: i32,
    #[serde(default)]
    pub order: i32,
    #[serde(rename = "type", default)]
    pub kind: i32,
    #[serde(default)]
    pub url: String,
}

pub(crate) fn display_author<'a>(author: &'a str, share_user: &'a str) -> &'a str {
    if !author.is_empty() {
        author
    } else if !share_user.is_empty() {
        share_user
    } else {
        ANONYMOUS
    }
}

pub(crate) fn category_label(super_chapter: &str, chapter: &str) -> String {
    match (super_chapter.is_empty(), chapter.is_empty()) {
        (false, false) => format!("{} · {}", super_chapter, chapter),
        (true, _) => chapter.to_string(),
        (false, true) => super_chapter.to_string(),
    }
}
