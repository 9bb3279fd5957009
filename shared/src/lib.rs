//! Domain logic shared by the dogcatdang web front end.
//!
//! Everything in this crate is target-independent: the browser crate drives
//! it from Yew components, and the test suite runs it natively.

pub mod editor;
pub mod editor_config;
pub mod error;
pub mod like_state;
pub mod location;
pub mod models;
pub mod query_cache;
pub mod routes;
pub mod sanitize;
pub mod storage;

pub use editor::{EditorState, SubmitOutcome};
pub use editor_config::{EditorConfig, RenderRule, ToolbarItem};
pub use error::{ApiError, SubmitFailure};
pub use like_state::{LikeRequest, LikeState};
pub use location::shortened_location;
pub use models::{
    AnimalSummary, Article, ArticleDraft, ArticleListItem, ArticleListPage, ArticleRequest,
    ArticleSubmission, PresignedUrl, SubmitMethod, UserInfo,
};
pub use query_cache::{QueryCache, QueryKey};
pub use routes::{AnimalRoute, ArticleRoute};
pub use sanitize::sanitize_article_html;
