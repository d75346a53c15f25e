//! Headless presenter: drive one screen and print what it shows.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing::info;

use super::args::{ProjectArg, RunOptions, ScreenArg};
use crate::api::WanAndroidClient;
use crate::cli_output::{
    format_article, format_banner, format_category, format_navigation_group, format_project,
    format_system_node, icons, print_footer, print_header, print_section, print_section_end,
    print_step_line, state_line, summarize,
};
use crate::config::ClientConfig;
use crate::repository::{HomeRepository, ProjectRepository, TreeRepository};
use crate::traits::ApiClient;
use crate::view_state::{
    home_screen, ListSnapshot, LoadState, ProjectScreen, SquareScreen, SquareTab,
};

/// Build the client from the options.
pub fn build_client(options: &RunOptions) -> Result<Arc<dyn ApiClient>> {
    let mut config = ClientConfig::default();
    if let Some(url) = &options.base_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(secs) = options.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    info!(base_url = config.base_url(), "Using API host");
    let client = WanAndroidClient::new(config).wrap_err("Failed to build HTTP client")?;
    Ok(Arc::new(client))
}

/// Load the requested screen, print it, and fail if it ended in Error.
pub async fn run_screen(options: RunOptions, api: Arc<dyn ApiClient>) -> Result<()> {
    let extra_pages = options.pages.saturating_sub(1);
    let state = match options.screen {
        ScreenArg::Home => run_home(api, extra_pages).await,
        ScreenArg::Projects(selection) => run_projects(api, selection, extra_pages).await,
        ScreenArg::Square => run_square(api, SquareTab::Square, extra_pages).await,
        ScreenArg::Ask => run_square(api, SquareTab::DailyQuestion, extra_pages).await,
        ScreenArg::System => run_square(api, SquareTab::System, extra_pages).await,
        ScreenArg::Nav => run_square(api, SquareTab::Navigation, extra_pages).await,
    };

    match state {
        LoadState::Error(message) => Err(eyre!(message)),
        _ => Ok(()),
    }
}

fn print_list<T, X>(title: &str, snapshot: &ListSnapshot<T, X>, render: impl Fn(&T) -> String) {
    print_section(&format!("{} ({})", title, snapshot.items.len()));
    for item in &snapshot.items {
        print_step_line(icons::BULLET, &render(item));
    }
    if let Some(error) = &snapshot.append_error {
        print_step_line(icons::WARNING, error);
    }
    print_section_end();
}

fn print_outcome<T, X>(snapshot: &ListSnapshot<T, X>) {
    let (icon, _) = state_line(&snapshot.state);
    print_footer(icon, &summarize(snapshot));
}

async fn run_home(api: Arc<dyn ApiClient>, extra_pages: u32) -> LoadState {
    let home = home_screen(HomeRepository::new(api));
    home.load().await;
    for _ in 0..extra_pages {
        home.load_more().await;
    }
    let snapshot = home.snapshot();

    print_header("HOME");
    if snapshot.state.is_success() {
        print_section(&format!("BANNERS ({})", snapshot.head.banners.len()));
        for banner in &snapshot.head.banners {
            print_step_line(icons::BULLET, &format_banner(banner));
        }
        print_section_end();
        for pinned in &snapshot.head.pinned {
            print_step_line(icons::PINNED, &format_article(pinned));
        }
        print_list("ARTICLES", &snapshot, format_article);
    }
    print_outcome(&snapshot);
    home.dispose();
    snapshot.state
}

async fn run_projects(
    api: Arc<dyn ApiClient>,
    selection: ProjectArg,
    extra_pages: u32,
) -> LoadState {
    let screen = ProjectScreen::new(ProjectRepository::new(api));
    match selection {
        ProjectArg::First => screen.load().await,
        ProjectArg::Category(id) => screen.select_category(id).await,
        ProjectArg::Newest => screen.select_newest().await,
    }
    for _ in 0..extra_pages {
        screen.load_more().await;
    }
    let view = screen.view();

    print_header("PROJECTS");
    if !view.categories.is_empty() {
        print_section("CATEGORIES");
        for category in &view.categories {
            print_step_line(icons::BULLET, &format_category(category));
        }
        print_section_end();
    }
    if let Some(mode) = view.mode {
        print_list(&mode.to_string().to_uppercase(), &view.projects, format_project);
    }
    // A directly selected list never loads categories.
    let state = match selection {
        ProjectArg::First => view.state.clone(),
        ProjectArg::Category(_) | ProjectArg::Newest => view.projects.state.clone(),
    };
    let (icon, message) = state_line(&state);
    let summary = if state.is_success() {
        summarize(&view.projects)
    } else {
        message
    };
    print_footer(icon, &summary);
    screen.dispose();
    state
}

async fn run_square(api: Arc<dyn ApiClient>, tab: SquareTab, extra_pages: u32) -> LoadState {
    let screen = SquareScreen::new(TreeRepository::new(api));
    screen.select_tab(tab).await;
    for _ in 0..extra_pages {
        screen.load_more().await;
    }

    print_header(&tab.label().to_uppercase());
    let state = match tab {
        SquareTab::Square => show(screen.square().snapshot(), "ARTICLES", format_article),
        SquareTab::DailyQuestion => {
            show(screen.daily_questions().snapshot(), "QUESTIONS", format_article)
        }
        SquareTab::System => show(screen.system().snapshot(), "NODES", format_system_node),
        SquareTab::Navigation => show(
            screen.navigation().snapshot(),
            "GROUPS",
            format_navigation_group,
        ),
    };
    screen.dispose();
    state
}

fn show<T>(snapshot: ListSnapshot<T>, title: &str, render: impl Fn(&T) -> String) -> LoadState {
    if snapshot.state.is_success() {
        print_list(title, &snapshot, render);
    }
    print_outcome(&snapshot);
    snapshot.state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{articles_json, Reply, ScriptedApi};
    use crate::api::EndpointKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_run_square_loads_requested_pages() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::Square, Reply::page(articles_json(&[1]), false));
        api.push(EndpointKind::Square, Reply::page(articles_json(&[2]), false));
        api.push(EndpointKind::Square, Reply::page(articles_json(&[3]), true));

        let mut options = RunOptions::new(ScreenArg::Square);
        options.pages = 3;
        run_screen(options, Arc::new(api.clone())).await.unwrap();

        assert_eq!(api.calls_to(EndpointKind::Square).len(), 3);
    }

    #[tokio::test]
    async fn test_run_fails_on_error_state() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::Navigation, Reply::api_error(-1, "nav down"));

        let result = run_screen(RunOptions::new(ScreenArg::Nav), Arc::new(api)).await;
        assert_eq!(result.unwrap_err().to_string(), "nav down");
    }

    #[tokio::test]
    async fn test_run_projects_for_category() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::Projects, Reply::page(json!([{"id": 5, "title": "p"}]), true));

        let options = RunOptions::new(ScreenArg::Projects(ProjectArg::Category(60)));
        run_screen(options, Arc::new(api.clone())).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![crate::api::Endpoint::Projects {
                page: 1,
                category_id: 60
            }]
        );
    }

    #[test]
    fn test_build_client_applies_options() {
        let mut options = RunOptions::new(ScreenArg::Home);
        options.base_url = Some("http://localhost:1".to_string());
        options.timeout_secs = Some(3);
        assert!(build_client(&options).is_ok());
    }
}
