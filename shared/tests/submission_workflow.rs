//! End-to-end article submission workflow over the shared editor logic.

#[cfg(test)]
mod tests {
    use dogcatdang_shared::{
        ApiError, EditorConfig, EditorState, QueryCache, QueryKey, SubmitFailure, SubmitOutcome,
    };

    #[test]
    fn new_article_with_uploaded_image_posts_sanitized_body() {
        let config = EditorConfig::article();
        let image = config.render_image("https://bucket.example.com/1_dog.png", "dog");

        let mut editor = EditorState::new(None, None, None);
        editor.set_title("입양 후기");
        editor.set_body(format!(
            "<h2>우리 집 막내</h2><p><strong>건강해요</strong></p>{image}<img src=x onerror=alert(1)>"
        ));

        let submission = editor.begin_submit(true, "보호소").expect("submission starts");
        assert_eq!(submission.method.as_str(), "POST");
        assert_eq!(submission.nickname, "보호소");

        let body = serde_json::to_value(&submission.data).expect("serialize body");
        assert_eq!(body["title"], "입양 후기");
        assert_eq!(body["isSaved"], true);
        assert!(body.get("boardId").is_none());

        let content = body["content"].as_str().expect("content is a string");
        assert!(content.contains("<h2>"));
        assert!(content.contains("<strong>건강해요</strong>"));
        assert!(content.contains("https://bucket.example.com/1_dog.png"));
        assert!(content.contains("max-width"));
        assert!(!content.contains("onerror"));

        let mut cache = QueryCache::new();
        let seen = cache.generation(QueryKey::ArticleList);
        match editor.finish_submit(Ok(())) {
            SubmitOutcome::Completed {
                invalidate,
                navigate_to,
            } => {
                for key in invalidate {
                    cache.invalidate(key);
                }
                assert_eq!(navigate_to.path(), "/articles/1");
            },
            SubmitOutcome::Failed => panic!("submission should succeed"),
        }
        assert!(cache.is_stale(QueryKey::ArticleList, seen));
    }

    #[test]
    fn failed_update_shows_alert_then_allows_retry() {
        let mut editor =
            EditorState::new(Some("수정".to_string()), Some("<p>old</p>".to_string()), Some(5));

        let first = editor.begin_submit(false, "n").expect("submission starts");
        assert_eq!(first.method.as_str(), "PUT");
        assert_eq!(
            serde_json::to_value(&first.data).expect("serialize body")["boardId"],
            5
        );

        let outcome = editor.finish_submit(Err(SubmitFailure::from(ApiError::Unauthorized)));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(editor.alert().map(|a| a.name.as_str()), Some("UnauthorizedError"));

        editor.dismiss_alert();
        editor.set_body("<p>new</p>");
        let retry = editor.begin_submit(true, "n").expect("user resubmits");
        assert_eq!(retry.data.content, "<p>new</p>");

        let mut cache = QueryCache::new();
        let seen_detail = cache.generation(QueryKey::ArticleDetail(5));
        match editor.finish_submit(Ok(())) {
            SubmitOutcome::Completed {
                invalidate,
                navigate_to,
            } => {
                for key in invalidate {
                    cache.invalidate(key);
                }
                assert_eq!(navigate_to.path(), "/articles/detail/5");
            },
            SubmitOutcome::Failed => panic!("retry should succeed"),
        }
        assert!(cache.is_stale(QueryKey::ArticleDetail(5), seen_detail));
        assert!(!cache.is_stale(QueryKey::ArticleDetail(6), 0));
    }
}
