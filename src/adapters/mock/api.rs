//! Scripted [`ApiClient`] for controller and repository tests.
//!
//! Replies are queued per endpoint as raw JSON envelopes and decoded the
//! same way the HTTP client decodes them. A reply can be held behind a
//! [`Gate`] so tests can finish overlapping requests in a chosen order.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::{oneshot, watch};

use crate::api::{Endpoint, EndpointKind};
use crate::error::{ErrorContext, NetworkError, WanError, WanResult};
use crate::models::{
    ApiResponse, Article, ArticlePage, Banner, NavigationGroup, ProjectCategory, ProjectPage,
    SystemNode,
};
use crate::traits::ApiClient;

/// What a scripted call returns.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A full envelope (`data` / `errorCode` / `errorMsg`).
    Envelope(Value),
    /// A transport failure.
    Network(NetworkError),
}

impl Reply {
    /// Successful envelope around `data`.
    pub fn ok(data: Value) -> Self {
        Reply::Envelope(json!({ "data": data, "errorCode": 0, "errorMsg": "" }))
    }

    /// Successful envelope around one page of `items`.
    pub fn page(items: Value, over: bool) -> Self {
        Reply::ok(page_body(items, over))
    }

    /// Application failure (`errorCode != 0`).
    pub fn api_error(code: i32, message: &str) -> Self {
        Reply::Envelope(json!({ "data": null, "errorCode": code, "errorMsg": message }))
    }

    /// Connection refused.
    pub fn offline() -> Self {
        Reply::Network(NetworkError::ConnectionFailed {
            url: "scripted".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

/// Paged envelope body as the server sends it.
pub fn page_body(items: Value, over: bool) -> Value {
    let size = items.as_array().map(Vec::len).unwrap_or(0);
    json!({
        "curPage": 1,
        "datas": items,
        "offset": 0,
        "over": over,
        "pageCount": 1,
        "size": size,
        "total": size,
    })
}

/// Minimal article JSON with the given id and title.
pub fn article_json(id: i64, title: &str) -> Value {
    json!({ "id": id, "title": title, "author": "", "shareUser": "tester" })
}

/// A list of minimal articles titled by their ids.
pub fn articles_json(ids: &[i64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| article_json(*id, &format!("article {}", id)))
            .collect(),
    )
}

/// Releases a gated reply.
#[derive(Debug)]
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

struct Queued {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct Script {
    queues: HashMap<EndpointKind, VecDeque<Queued>>,
    fallback: HashMap<EndpointKind, Reply>,
    calls: Vec<Endpoint>,
}

/// In-memory [`ApiClient`] driven by queued replies.
///
/// Each call pops the next queued reply for its endpoint, falling back to
/// the reply set with [`always`](Self::always), and records the request.
#[derive(Clone)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
    call_count: Arc<watch::Sender<usize>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedApi {
    pub fn new() -> Self {
        let (call_count, _) = watch::channel(0);
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            call_count: Arc::new(call_count),
        }
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a reply for the next call to `kind`.
    pub fn push(&self, kind: EndpointKind, reply: Reply) -> &Self {
        self.script()
            .queues
            .entry(kind)
            .or_default()
            .push_back(Queued { reply, gate: None });
        self
    }

    /// Queue a reply that is held until the returned gate is opened.
    /// Dropping the gate releases the reply too.
    pub fn push_gated(&self, kind: EndpointKind, reply: Reply) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script()
            .queues
            .entry(kind)
            .or_default()
            .push_back(Queued {
                reply,
                gate: Some(rx),
            });
        Gate(tx)
    }

    /// Reply used for `kind` whenever its queue is empty.
    pub fn always(&self, kind: EndpointKind, reply: Reply) -> &Self {
        self.script().fallback.insert(kind, reply);
        self
    }

    /// Every request issued so far, in order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.script().calls.clone()
    }

    pub fn calls_to(&self, kind: EndpointKind) -> Vec<Endpoint> {
        self.script()
            .calls
            .iter()
            .filter(|e| e.kind() == kind)
            .copied()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.borrow()
    }

    /// Wait until at least `n` requests have been issued in total.
    pub async fn wait_for_calls(&self, n: usize) {
        let mut rx = self.call_count.subscribe();
        let _ = rx.wait_for(|count| *count >= n).await;
    }

    async fn reply<T>(&self, endpoint: Endpoint) -> WanResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let next = {
            let mut script = self.script();
            script.calls.push(endpoint);
            let kind = endpoint.kind();
            match script.queues.get_mut(&kind).and_then(VecDeque::pop_front) {
                Some(queued) => Some(queued),
                None => script.fallback.get(&kind).cloned().map(|reply| Queued {
                    reply,
                    gate: None,
                }),
            }
        };
        self.call_count.send_modify(|count| *count += 1);

        let Some(queued) = next else {
            return Err(WanError::MissingData(format!(
                "no scripted reply for {}",
                endpoint
            )));
        };

        if let Some(gate) = queued.gate {
            let _ = gate.await;
        }

        let ctx = ErrorContext::new(endpoint.kind().as_str()).with_page(endpoint.page());
        match queued.reply {
            Reply::Network(err) => Err(WanError::from(err).with_context(ctx)),
            Reply::Envelope(body) => serde_json::from_value(body).map_err(|e| {
                WanError::Decode {
                    what: endpoint.to_string(),
                    message: e.to_string(),
                }
                .with_context(ctx)
            }),
        }
    }
}

#[async_trait]
impl ApiClient for ScriptedApi {
    async fn fetch_banners(&self) -> WanResult<ApiResponse<Vec<Banner>>> {
        self.reply(Endpoint::Banners).await
    }

    async fn fetch_articles(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.reply(Endpoint::Articles { page }).await
    }

    async fn fetch_top_articles(&self) -> WanResult<ApiResponse<Vec<Article>>> {
        self.reply(Endpoint::TopArticles).await
    }

    async fn fetch_project_categories(&self) -> WanResult<ApiResponse<Vec<ProjectCategory>>> {
        self.reply(Endpoint::ProjectCategories).await
    }

    async fn fetch_projects(
        &self,
        page: u32,
        category_id: i64,
    ) -> WanResult<ApiResponse<ProjectPage>> {
        self.reply(Endpoint::Projects { page, category_id }).await
    }

    async fn fetch_new_projects(&self, page: u32) -> WanResult<ApiResponse<ProjectPage>> {
        self.reply(Endpoint::NewestProjects { page }).await
    }

    async fn fetch_system_tree(&self) -> WanResult<ApiResponse<Vec<SystemNode>>> {
        self.reply(Endpoint::SystemTree).await
    }

    async fn fetch_square(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.reply(Endpoint::Square { page }).await
    }

    async fn fetch_navigation(&self) -> WanResult<ApiResponse<Vec<NavigationGroup>>> {
        self.reply(Endpoint::Navigation).await
    }

    async fn fetch_daily_question(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.reply(Endpoint::DailyQuestions { page }).await
    }
}
