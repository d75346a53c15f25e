//! Knowledge-system tree and navigation groups.

use serde::{Deserialize, Serialize};

use super::article::Article;

/// A top-level node of the knowledge-system tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemNode {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub visible: i32,
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub parent_chapter_id: i64,
    #[serde(default = "Vec::new")]
    pub children: Vec<SystemChild>,
}

/// Second (and last) level of the system tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemChild {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub visible: i32,
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub parent_chapter_id: i64,
}

/// A named group of article links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationGroup {
    #[serde(rename = "cid", default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default = "Vec::new")]
    pub articles: Vec<Article>,
}
