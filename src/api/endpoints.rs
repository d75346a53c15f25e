//! The ten read endpoints of the WanAndroid API.

use std::fmt;

/// How an endpoint numbers its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIndex {
    /// First page is 0.
    ZeroBased,
    /// First page is 1.
    OneBased,
    /// The whole list comes back in one response.
    Unpaged,
}

impl PageIndex {
    /// Page number of the first page.
    pub fn initial(self) -> u32 {
        match self {
            PageIndex::OneBased => 1,
            PageIndex::ZeroBased | PageIndex::Unpaged => 0,
        }
    }

    pub fn is_paged(self) -> bool {
        !matches!(self, PageIndex::Unpaged)
    }
}

/// Endpoint identity without parameters. Used as a key by test doubles and
/// in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Banners,
    Articles,
    TopArticles,
    ProjectCategories,
    Projects,
    NewestProjects,
    SystemTree,
    Square,
    Navigation,
    DailyQuestions,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 10] = [
        EndpointKind::Banners,
        EndpointKind::Articles,
        EndpointKind::TopArticles,
        EndpointKind::ProjectCategories,
        EndpointKind::Projects,
        EndpointKind::NewestProjects,
        EndpointKind::SystemTree,
        EndpointKind::Square,
        EndpointKind::Navigation,
        EndpointKind::DailyQuestions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EndpointKind::Banners => "banners",
            EndpointKind::Articles => "articles",
            EndpointKind::TopArticles => "top_articles",
            EndpointKind::ProjectCategories => "project_categories",
            EndpointKind::Projects => "projects",
            EndpointKind::NewestProjects => "newest_projects",
            EndpointKind::SystemTree => "system_tree",
            EndpointKind::Square => "square",
            EndpointKind::Navigation => "navigation",
            EndpointKind::DailyQuestions => "daily_questions",
        }
    }

    pub fn page_index(self) -> PageIndex {
        match self {
            EndpointKind::Articles | EndpointKind::NewestProjects | EndpointKind::Square => {
                PageIndex::ZeroBased
            }
            EndpointKind::Projects | EndpointKind::DailyQuestions => PageIndex::OneBased,
            EndpointKind::Banners
            | EndpointKind::TopArticles
            | EndpointKind::ProjectCategories
            | EndpointKind::SystemTree
            | EndpointKind::Navigation => PageIndex::Unpaged,
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parameterised request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Banners,
    Articles { page: u32 },
    TopArticles,
    ProjectCategories,
    Projects { page: u32, category_id: i64 },
    NewestProjects { page: u32 },
    SystemTree,
    Square { page: u32 },
    Navigation,
    DailyQuestions { page: u32 },
}

impl Endpoint {
    /// Path relative to the base URL, including any query string.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Banners => "banner/json".to_string(),
            Endpoint::Articles { page } => format!("article/list/{}/json", page),
            Endpoint::TopArticles => "article/top/json".to_string(),
            Endpoint::ProjectCategories => "project/tree/json".to_string(),
            Endpoint::Projects { page, category_id } => {
                format!("project/list/{}/json?cid={}", page, category_id)
            }
            Endpoint::NewestProjects { page } => format!("article/listproject/{}/json", page),
            Endpoint::SystemTree => "tree/json".to_string(),
            Endpoint::Square { page } => format!("user_article/list/{}/json", page),
            Endpoint::Navigation => "navi/json".to_string(),
            Endpoint::DailyQuestions { page } => format!("wenda/list/{}/json", page),
        }
    }

    pub fn kind(&self) -> EndpointKind {
        match self {
            Endpoint::Banners => EndpointKind::Banners,
            Endpoint::Articles { .. } => EndpointKind::Articles,
            Endpoint::TopArticles => EndpointKind::TopArticles,
            Endpoint::ProjectCategories => EndpointKind::ProjectCategories,
            Endpoint::Projects { .. } => EndpointKind::Projects,
            Endpoint::NewestProjects { .. } => EndpointKind::NewestProjects,
            Endpoint::SystemTree => EndpointKind::SystemTree,
            Endpoint::Square { .. } => EndpointKind::Square,
            Endpoint::Navigation => EndpointKind::Navigation,
            Endpoint::DailyQuestions { .. } => EndpointKind::DailyQuestions,
        }
    }

    pub fn page(&self) -> Option<u32> {
        match *self {
            Endpoint::Articles { page }
            | Endpoint::Projects { page, .. }
            | Endpoint::NewestProjects { page }
            | Endpoint::Square { page }
            | Endpoint::DailyQuestions { page } => Some(page),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page() {
            Some(page) => write!(f, "{} page {}", self.kind(), page),
            None => write!(f, "{}", self.kind()),
        }
    }
}
