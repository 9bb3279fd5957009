//! Naming helpers for images uploaded to object storage.

/// Object name for an uploaded file: the upload time in milliseconds
/// followed by the original name, with characters outside
/// `[A-Za-z0-9._-]` replaced by `_`.
pub fn object_file_name(original: &str, timestamp_ms: u64) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let cleaned: String = base
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = if cleaned.trim_matches(['.', '_']).is_empty() {
        "image".to_string()
    } else {
        cleaned
    };
    format!("{timestamp_ms}_{cleaned}")
}

/// Permanent object URL behind a presigned upload URL.
pub fn public_url(presigned: &str) -> &str {
    presigned.split(['?', '#']).next().unwrap_or(presigned)
}

#[cfg(test)]
mod tests {
    use super::{object_file_name, public_url};

    #[test]
    fn file_names_are_prefixed_and_cleaned() {
        assert_eq!(object_file_name("dog.png", 1700000000000), "1700000000000_dog.png");
        assert_eq!(object_file_name("my dog (1).jpg", 5), "5_my_dog__1_.jpg");
        assert_eq!(object_file_name("C:\\photos\\cat.jpg", 5), "5_cat.jpg");
        assert_eq!(object_file_name("강아지.png", 5), "5____.png");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(object_file_name("", 5), "5_image");
        assert_eq!(object_file_name("___", 5), "5_image");
    }

    #[test]
    fn public_url_drops_signature() {
        assert_eq!(
            public_url("https://bucket.s3.amazonaws.com/1_dog.png?X-Amz-Signature=abc&X-Amz-Expires=60"),
            "https://bucket.s3.amazonaws.com/1_dog.png"
        );
        assert_eq!(public_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }
}
