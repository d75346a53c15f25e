//! Screens with several lists: returning to a loaded tab or mode shows it
//! as it was without a request; an errored one is fetched again.

mod common;

use common::*;
use serde_json::json;
use wanandroid::api::{Endpoint, EndpointKind};
use wanandroid::view_state::{LoadState, ProjectMode, SquareTab};

#[tokio::test]
async fn test_returning_to_loaded_tab_issues_no_request() {
    let api = scripted();
    api.push(EndpointKind::Square, Reply::page(articles_json(&[1, 2]), false));
    api.push(EndpointKind::Square, Reply::page(articles_json(&[3]), false));
    api.push(EndpointKind::DailyQuestions, Reply::page(articles_json(&[9]), true));
    let screen = square_screen(&api);

    screen.select_tab(SquareTab::Square).await;
    screen.load_more().await;
    screen.select_tab(SquareTab::DailyQuestion).await;
    screen.select_tab(SquareTab::Square).await;

    assert_eq!(api.call_count(), 3);
    assert_eq!(screen.view().tab, SquareTab::Square);
    assert_eq!(ids(&screen.square().items()), vec![1, 2, 3]);
    assert_eq!(screen.square().cursor(), 1);
    assert_eq!(ids(&screen.daily_questions().items()), vec![9]);
}

#[tokio::test]
async fn test_returning_to_errored_tab_retries() {
    let api = scripted();
    api.push(EndpointKind::Navigation, Reply::api_error(-1, "down"));
    api.push(EndpointKind::SystemTree, Reply::ok(json!([])));
    api.push(EndpointKind::Navigation, Reply::ok(json!([{"cid": 1, "name": "tools", "articles": []}])));
    let screen = square_screen(&api);

    screen.select_tab(SquareTab::Navigation).await;
    assert_eq!(screen.view().state, LoadState::Error("down".to_string()));

    screen.select_tab(SquareTab::System).await;
    screen.select_tab(SquareTab::Navigation).await;

    assert_eq!(screen.view().state, LoadState::Success);
    assert_eq!(api.calls_to(EndpointKind::Navigation).len(), 2);
}

#[tokio::test]
async fn test_refresh_refetches_only_active_tab() {
    let api = scripted();
    api.always(EndpointKind::Square, Reply::page(articles_json(&[1]), true));
    api.always(EndpointKind::SystemTree, Reply::ok(json!([])));
    let screen = square_screen(&api);

    screen.select_tab(SquareTab::Square).await;
    screen.select_tab(SquareTab::System).await;
    screen.refresh().await;

    assert_eq!(api.calls_to(EndpointKind::SystemTree).len(), 2);
    assert_eq!(api.calls_to(EndpointKind::Square).len(), 1);
}

#[tokio::test]
async fn test_view_follows_active_tab_state() {
    let api = scripted();
    api.push(EndpointKind::Square, Reply::page(articles_json(&[1]), true));
    api.push(EndpointKind::DailyQuestions, Reply::offline());
    let screen = square_screen(&api);
    let mut rx = screen.subscribe();

    screen.select_tab(SquareTab::Square).await;
    assert!(rx.borrow_and_update().state.is_success());

    assert!(screen.select_tab_index(1).await);
    let view = rx.borrow_and_update().clone();
    assert_eq!(view.tab, SquareTab::DailyQuestion);
    assert!(view.state.is_error());

    assert!(!screen.select_tab_index(4).await);
    assert_eq!(screen.tab(), SquareTab::DailyQuestion);
}

#[tokio::test]
async fn test_project_load_selects_first_category() {
    let api = scripted();
    api.push(
        EndpointKind::ProjectCategories,
        Reply::ok(json!([category_json(294, "完整项目"), category_json(402, "跨平台应用")])),
    );
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[1, 2]), false));
    let screen = project_screen(&api);

    screen.load().await;

    let view = screen.view();
    assert_eq!(view.state, LoadState::Success);
    assert_eq!(view.mode, Some(ProjectMode::Category(294)));
    assert_eq!(view.categories.len(), 2);
    assert_eq!(view.projects.items.len(), 2);
    assert_eq!(view.projects.cursor, 1);
    assert_eq!(
        api.calls(),
        vec![
            Endpoint::ProjectCategories,
            Endpoint::Projects {
                page: 1,
                category_id: 294
            },
        ]
    );
}

#[tokio::test]
async fn test_project_categories_are_cached_per_mode() {
    let api = scripted();
    api.push(
        EndpointKind::ProjectCategories,
        Reply::ok(json!([category_json(294, "a"), category_json(402, "b")])),
    );
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[1]), true));
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[2]), true));
    api.push(EndpointKind::NewestProjects, Reply::page(projects_json(&[3]), true));
    let screen = project_screen(&api);

    screen.load().await;
    screen.select_category(402).await;
    screen.select_newest().await;
    screen.select_category(294).await;
    screen.select_category(402).await;

    assert_eq!(api.call_count(), 4);
    let view = screen.view();
    assert_eq!(view.mode, Some(ProjectMode::Category(402)));
    assert_eq!(view.projects.items[0].id, 2);
    assert!(screen.list(ProjectMode::Newest).is_some());
}

#[tokio::test]
async fn test_project_refresh_reloads_failed_categories() {
    let api = scripted();
    api.push(EndpointKind::ProjectCategories, Reply::offline());
    api.push(EndpointKind::ProjectCategories, Reply::ok(json!([category_json(294, "a")])));
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[1]), true));
    let screen = project_screen(&api);

    screen.load().await;
    assert!(screen.view().state.is_error());
    assert_eq!(screen.mode(), None);

    screen.refresh().await;
    let view = screen.view();
    assert_eq!(view.state, LoadState::Success);
    assert_eq!(view.mode, Some(ProjectMode::Category(294)));
}

#[tokio::test]
async fn test_project_refresh_refetches_active_list() {
    let api = scripted();
    api.push(EndpointKind::ProjectCategories, Reply::ok(json!([category_json(294, "a")])));
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[1]), false));
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[2]), false));
    api.push(EndpointKind::Projects, Reply::page(projects_json(&[5]), false));
    let screen = project_screen(&api);

    screen.load().await;
    screen.load_more().await;
    assert_eq!(screen.view().projects.cursor, 2);

    screen.refresh().await;
    let view = screen.view();
    assert_eq!(view.projects.cursor, 1);
    assert_eq!(view.projects.items.len(), 1);
    assert_eq!(view.projects.items[0].id, 5);
    assert_eq!(api.calls_to(EndpointKind::ProjectCategories).len(), 1);
}

#[tokio::test]
async fn test_project_without_categories_is_empty_success() {
    let api = scripted();
    api.push(EndpointKind::ProjectCategories, Reply::ok(json!([])));
    let screen = project_screen(&api);

    screen.load().await;

    let view = screen.view();
    assert_eq!(view.state, LoadState::Success);
    assert_eq!(view.mode, None);
    assert!(view.projects.items.is_empty());
    assert_eq!(api.call_count(), 1);
}
