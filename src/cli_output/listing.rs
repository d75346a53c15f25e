//! One-line renderings of records and view state.

use crate::models::{Article, Banner, NavigationGroup, Project, ProjectCategory, SystemNode};
use crate::view_state::{ListSnapshot, LoadState};

use super::boxes::icons;

/// Truncate to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn format_article(article: &Article) -> String {
    let mut line = format!(
        "{}  [{}] {} · {}",
        truncate(&article.title, 48),
        article.category_label(),
        article.author_name(),
        article.nice_date
    );
    if article.fresh {
        line.push_str(" (new)");
    }
    line
}

pub fn format_banner(banner: &Banner) -> String {
    format!("{}  {}", banner.title, banner.url)
}

pub fn format_project(project: &Project) -> String {
    format!(
        "{}  {} · {}",
        truncate(&project.title, 48),
        project.author_name(),
        project.project_link
    )
}

pub fn format_category(category: &ProjectCategory) -> String {
    format!("{} ({})", category.name, category.id)
}

pub fn format_system_node(node: &SystemNode) -> String {
    let children: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
    format!("{}: {}", node.name, children.join(", "))
}

pub fn format_navigation_group(group: &NavigationGroup) -> String {
    format!("{} ({} links)", group.name, group.articles.len())
}

/// Icon and message for a load state.
pub fn state_line(state: &LoadState) -> (&'static str, String) {
    match state {
        LoadState::Loading => (icons::LOADING, "Loading".to_string()),
        LoadState::Success => (icons::SUCCESS, "Loaded".to_string()),
        LoadState::Error(message) => (icons::FAILURE, message.clone()),
    }
}

/// One-line summary of a list snapshot.
pub fn summarize<T, X>(snapshot: &ListSnapshot<T, X>) -> String {
    let mut summary = match &snapshot.state {
        LoadState::Success => format!(
            "{} items, page {}{}",
            snapshot.items.len(),
            snapshot.cursor,
            if snapshot.has_more { "" } else { " (end)" }
        ),
        other => other.to_string(),
    };
    if let Some(error) = &snapshot.append_error {
        summary.push_str(&format!("; next page failed: {}", error));
    }
    summary
}
