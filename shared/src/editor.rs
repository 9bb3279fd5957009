//! State machine behind the article editor.
//!
//! ```text
//! editing --begin_submit--> pending --finish_submit(Ok)--> completed (navigate)
//!    ^                         |
//!    +--dismiss_alert-- alert <+--finish_submit(Err)
//! ```
//!
//! The preview toggle is independent of submission and can be flipped while
//! editing.

use tracing::debug;

use crate::{
    error::SubmitFailure,
    models::{ArticleDraft, ArticleRequest, ArticleSubmission, SubmitMethod},
    query_cache::QueryKey,
    routes::ArticleRoute,
    sanitize::sanitize_article_html,
};

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the article.
    Completed {
        /// Cached data the caller must invalidate: the listing, plus the
        /// article itself after an update.
        invalidate: Vec<QueryKey>,
        /// Route the caller must navigate to.
        navigate_to: ArticleRoute,
    },
    /// The submission failed; the alert is now open.
    Failed,
}

/// Editor state: the draft, preview and alert visibility, and whether a
/// submission is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    draft: ArticleDraft,
    preview_open: bool,
    pending: bool,
    alert: Option<SubmitFailure>,
}

impl EditorState {
    /// Editor pre-filled from an existing article, or empty.
    pub fn new(title: Option<String>, body: Option<String>, board_id: Option<u64>) -> Self {
        Self {
            draft: ArticleDraft {
                title: title.unwrap_or_default(),
                body: body.unwrap_or_default(),
                board_id,
            },
            ..Self::default()
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &ArticleDraft {
        &self.draft
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replace the raw body with the widget's latest HTML.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
    }

    /// Open or close the preview.
    pub fn toggle_preview(&mut self) {
        self.preview_open = !self.preview_open;
    }

    /// Whether the preview is open.
    pub fn preview_open(&self) -> bool {
        self.preview_open
    }

    /// Title and body shown in the preview, exactly as typed.
    pub fn preview(&self) -> (&str, &str) {
        (&self.draft.title, &self.draft.body)
    }

    /// Whether a submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the draft/preview/submit controls are shown. They are
    /// replaced by a loading indicator while a submission is pending.
    pub fn controls_visible(&self) -> bool {
        !self.pending
    }

    /// The failure shown in the alert, if the alert is open.
    pub fn alert(&self) -> Option<&SubmitFailure> {
        self.alert.as_ref()
    }

    /// Start a submission. `saved` is `false` for a draft and `true` for a
    /// final submission.
    ///
    /// Returns the request to send, or `None` when a submission is already
    /// in flight.
    pub fn begin_submit(&mut self, saved: bool, nickname: &str) -> Option<ArticleSubmission> {
        if self.pending {
            return None;
        }

        let method = SubmitMethod::for_board(self.draft.board_id);
        debug!(%method, saved, board_id = ?self.draft.board_id, "submitting article");

        self.pending = true;
        Some(ArticleSubmission {
            data: ArticleRequest {
                title: self.draft.title.clone(),
                content: sanitize_article_html(&self.draft.body),
                is_saved: saved,
                board_id: self.draft.board_id,
            },
            method,
            nickname: nickname.to_string(),
        })
    }

    /// Record the result of the in-flight submission.
    pub fn finish_submit(&mut self, result: Result<(), SubmitFailure>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(()) => SubmitOutcome::Completed {
                invalidate: std::iter::once(QueryKey::ArticleList)
                    .chain(self.draft.board_id.map(QueryKey::ArticleDetail))
                    .collect(),
                navigate_to: ArticleRoute::after_submit(self.draft.board_id),
            },
            Err(failure) => {
                debug!(name = %failure.name, "article submission failed");
                self.alert = Some(failure);
                SubmitOutcome::Failed
            },
        }
    }

    /// Close the error alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorState, SubmitOutcome};
    use crate::{
        error::SubmitFailure, models::SubmitMethod, query_cache::QueryKey, routes::ArticleRoute,
    };

    #[test]
    fn prefill_populates_draft() {
        let state = EditorState::new(Some("제목".into()), Some("<p>본문</p>".into()), Some(5));
        assert_eq!(state.draft().title, "제목");
        assert_eq!(state.draft().body, "<p>본문</p>");
        assert_eq!(state.draft().board_id, Some(5));
        assert!(state.controls_visible());
        assert!(state.alert().is_none());
    }

    #[test]
    fn draft_and_final_differ_only_in_saved_flag() {
        let mut state = EditorState::new(Some("t".into()), Some("<p>b</p>".into()), None);
        let draft = state.begin_submit(false, "멍멍").expect("first submit");
        state.finish_submit(Err(SubmitFailure::new("HttpError", "HTTP error: 500")));
        state.dismiss_alert();
        let last = state.begin_submit(true, "멍멍").expect("second submit");

        assert!(!draft.data.is_saved);
        assert!(last.data.is_saved);
        assert_eq!(draft.data.title, last.data.title);
        assert_eq!(draft.data.content, last.data.content);
        assert_eq!(draft.data.board_id, last.data.board_id);
        assert_eq!(draft.method, last.method);
        assert_eq!(draft.nickname, "멍멍");
    }

    #[test]
    fn pending_submission_blocks_resubmit_and_hides_controls() {
        let mut state = EditorState::default();
        assert!(state.begin_submit(true, "n").is_some());
        assert!(state.is_pending());
        assert!(!state.controls_visible());
        assert!(state.begin_submit(true, "n").is_none());
    }

    #[test]
    fn create_navigates_to_default_listing() {
        let mut state = EditorState::new(Some("t".into()), None, None);
        let submission = state.begin_submit(true, "n").expect("submit");
        assert_eq!(submission.method, SubmitMethod::Post);

        let outcome = state.finish_submit(Ok(()));
        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                invalidate: vec![QueryKey::ArticleList],
                navigate_to: ArticleRoute::default_list(),
            }
        );
        assert!(state.controls_visible());
    }

    #[test]
    fn update_navigates_to_board_detail() {
        let mut state = EditorState::new(Some("t".into()), None, Some(5));
        let submission = state.begin_submit(true, "n").expect("submit");
        assert_eq!(submission.method, SubmitMethod::Put);
        assert_eq!(submission.data.board_id, Some(5));

        match state.finish_submit(Ok(())) {
            SubmitOutcome::Completed {
                invalidate,
                navigate_to,
            } => {
                assert_eq!(invalidate, vec![QueryKey::ArticleList, QueryKey::ArticleDetail(5)]);
                assert_eq!(navigate_to.path(), "/articles/detail/5");
            },
            SubmitOutcome::Failed => panic!("expected success"),
        }
    }

    #[test]
    fn failure_opens_alert_until_dismissed() {
        let mut state = EditorState::default();
        state.begin_submit(false, "n");
        let outcome =
            state.finish_submit(Err(SubmitFailure::new("NetworkError", "Network error: offline")));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(state.controls_visible());

        let alert = state.alert().expect("alert open");
        assert_eq!(alert.name, "NetworkError");
        assert_eq!(alert.message, "Network error: offline");

        state.dismiss_alert();
        assert!(state.alert().is_none());
    }

    #[test]
    fn submission_sanitizes_but_preview_does_not() {
        let dirty = "<p><b>hi</b></p><script>alert(1)</script>";
        let mut state = EditorState::new(Some("t".into()), Some(dirty.into()), None);

        state.toggle_preview();
        assert!(state.preview_open());
        assert_eq!(state.preview(), ("t", dirty));

        let submission = state.begin_submit(true, "n").expect("submit");
        assert!(!submission.data.content.contains("<script"));
        assert!(submission.data.content.contains("<b>hi</b>"));
        assert_eq!(state.draft().body, dirty);

        state.toggle_preview();
        assert!(!state.preview_open());
    }
}
