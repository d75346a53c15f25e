//! Project categories and project records.

use serde::{Deserialize, Serialize};

use super::article::{category_label, display_author};

/// A project category. The tree endpoint may nest child categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategory {
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
    pub children: Vec<ProjectCategory>,
}

impl ProjectCategory {
    /// The category and all its descendants, depth first.
    pub fn flatten(&self) -> Vec<&ProjectCategory> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

/// A project listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub share_user: String,
    #[serde(default)]
    pub nice_date: String,
    #[serde(default)]
    pub link: String,
    /// Cover image.
    #[serde(default)]
    pub envelope_pic: String,
    /// Source repository.
    #[serde(default)]
    pub project_link: String,
    #[serde(default)]
    pub collect: bool,
    #[serde(default)]
    pub chapter_name: String,
    #[serde(default)]
    pub super_chapter_name: String,
}

impl Project {
    pub fn author_name(&self) -> &str {
        display_author(&self.author, &self.share_user)
    }

    pub fn category_label(&self) -> String {
        category_label(&self.super_chapter_name, &self.chapter_name)
    }
}
