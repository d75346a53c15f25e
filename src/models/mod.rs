mod article;
mod envelope;
mod project;
mod tree;

pub use article::{Article, Banner, ANONYMOUS};
pub use envelope::{ApiResponse, PagedEnvelope};
pub use project::{Project, ProjectCategory};
pub use tree::{NavigationGroup, SystemChild, SystemNode};

/// A page of articles.
pub type ArticlePage = PagedEnvelope<Article>;

/// A page of projects.
pub type ProjectPage = PagedEnvelope<Project>;
