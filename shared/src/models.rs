//! Wire and view models exchanged with the dogcatdang API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::shortened_location;

/// One adoptable animal as listed by the server.
///
/// Read-only to the front end: the only field the UI shadows locally is
/// `like`, see [`crate::LikeState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSummary {
    /// Stable identifier, the only key used for navigation and likes.
    pub animal_id: u64,
    /// Shelter-assigned registration code.
    pub code: String,
    /// Species, e.g. dog or cat.
    pub animal_type: String,
    /// Breed name as stored, words separated by `_`.
    pub breed: String,
    /// Age in years, free text.
    pub age: String,
    /// Weight, free text.
    pub weight: String,
    /// Date the animal was rescued.
    pub rescue_date: String,
    /// City of the shelter.
    pub selected_city: String,
    /// District of the shelter.
    pub selected_district: String,
    /// Free-text details.
    pub detail_info: String,
    /// Whether the animal is neutered.
    pub is_neuter: bool,
    /// Gender label.
    pub gender: String,
    /// Free-text distinguishing features.
    pub feature: String,
    /// Protection status.
    pub state: String,
    /// Image URL.
    pub img_url: String,
    /// Nickname of the shelter that registered the animal.
    pub user_nickname: String,
    /// Whether the current user likes this animal.
    pub like: bool,
    /// Full rescue location, whitespace separated.
    pub rescue_location: String,
    /// Number of adoption applications received.
    pub adoption_applicant_count: u32,
}

impl AnimalSummary {
    /// Breed with `_` separators replaced by spaces.
    pub fn breed_label(&self) -> String {
        self.breed.replace('_', " ")
    }

    /// Human readable neuter status.
    pub fn neuter_label(&self) -> &'static str {
        if self.is_neuter {
            "중성화 완료"
        } else {
            "중성화 알 수 없음"
        }
    }

    /// Rescue location trimmed for compact card display.
    pub fn short_location(&self) -> String {
        shortened_location(&self.rescue_location)
    }
}

/// Article being composed in the editor. Owned by the editor only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    /// Title as typed.
    pub title: String,
    /// Raw editor HTML, never sanitized in place.
    pub body: String,
    /// Board being edited; `None` creates a new article.
    pub board_id: Option<u64>,
}

/// HTTP method of an article submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitMethod {
    /// Create a new article.
    Post,
    /// Update an existing article.
    Put,
}

impl SubmitMethod {
    /// `Put` when a board id is present, `Post` otherwise.
    pub fn for_board(board_id: Option<u64>) -> Self {
        match board_id {
            Some(_) => SubmitMethod::Put,
            None => SubmitMethod::Post,
        }
    }

    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitMethod::Post => "POST",
            SubmitMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for SubmitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of an article create/update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    /// Article title.
    pub title: String,
    /// Sanitized HTML body.
    pub content: String,
    /// `false` for a draft, `true` for a final submission.
    pub is_saved: bool,
    /// Target board for updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<u64>,
}

/// Everything the API layer needs to send one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSubmission {
    /// Request body.
    pub data: ArticleRequest,
    /// `POST` to create, `PUT` to update.
    pub method: SubmitMethod,
    /// Nickname of the acting user.
    pub nickname: String,
}

/// Full article as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Board identifier.
    pub board_id: u64,
    /// Article title.
    pub title: String,
    /// Stored (sanitized) HTML body.
    pub content: String,
    /// Author nickname.
    #[serde(default)]
    pub nickname: String,
    /// Whether the article was submitted as final.
    #[serde(default)]
    pub is_saved: bool,
    /// Creation date as formatted by the server.
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Compact article row used by the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItem {
    /// Board identifier.
    pub board_id: u64,
    /// Article title.
    pub title: String,
    /// Author nickname.
    #[serde(default)]
    pub nickname: String,
    /// Creation date as formatted by the server.
    #[serde(default)]
    pub created_date: Option<String>,
}

impl From<Article> for ArticleListItem {
    fn from(a: Article) -> Self {
        ArticleListItem {
            board_id: a.board_id,
            title: a.title,
            nickname: a.nickname,
            created_date: a.created_date,
        }
    }
}

/// One page of the article listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListPage {
    /// Articles on this page.
    pub articles: Vec<ArticleListItem>,
    /// Total number of pages, at least 1 for display purposes.
    #[serde(default)]
    pub total_pages: u32,
}

/// Response of the storage presigning endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignedUrl {
    /// Presigned upload URL, query string included.
    pub url: String,
}

/// Identity of the signed-in user as kept in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Server-side user id.
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Display nickname, attached to every submission.
    #[serde(default)]
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_animal() -> AnimalSummary {
        AnimalSummary {
            animal_id: 7,
            code: "A-007".to_string(),
            animal_type: "개".to_string(),
            breed: "골든_리트리버".to_string(),
            age: "3".to_string(),
            weight: "24kg".to_string(),
            rescue_date: "2024-01-15".to_string(),
            selected_city: "서울".to_string(),
            selected_district: "강남구".to_string(),
            detail_info: "사람을 잘 따름".to_string(),
            is_neuter: false,
            gender: "수컷".to_string(),
            feature: "왼쪽 귀 점".to_string(),
            state: "보호중".to_string(),
            img_url: "https://img.example.com/7.jpg".to_string(),
            user_nickname: "강남보호소".to_string(),
            like: true,
            rescue_location: "서울 강남구 역삼동".to_string(),
            adoption_applicant_count: 2,
        }
    }

    #[test]
    fn animal_summary_reads_server_keys() {
        let json = serde_json::to_value(sample_animal()).expect("serialize animal");
        assert_eq!(json["animalId"], 7);
        assert_eq!(json["isNeuter"], false);
        assert_eq!(json["adoptionApplicantCount"], 2);
        assert_eq!(json["imgUrl"], "https://img.example.com/7.jpg");

        let parsed: AnimalSummary = serde_json::from_value(json).expect("parse animal");
        assert_eq!(parsed, sample_animal());
    }

    #[test]
    fn display_helpers_format_card_fields() {
        let mut animal = sample_animal();
        assert_eq!(animal.breed_label(), "골든 리트리버");
        assert_eq!(animal.neuter_label(), "중성화 알 수 없음");
        assert_eq!(animal.short_location(), "서울 강남구");

        animal.is_neuter = true;
        assert_eq!(animal.neuter_label(), "중성화 완료");
    }

    #[test]
    fn method_follows_board_presence() {
        assert_eq!(SubmitMethod::for_board(None), SubmitMethod::Post);
        assert_eq!(SubmitMethod::for_board(Some(5)), SubmitMethod::Put);
        assert_eq!(SubmitMethod::Put.to_string(), "PUT");
    }

    #[test]
    fn article_request_omits_missing_board_id() {
        let request = ArticleRequest {
            title: "t".to_string(),
            content: "<p>c</p>".to_string(),
            is_saved: false,
            board_id: None,
        };
        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(json, serde_json::json!({ "title": "t", "content": "<p>c</p>", "isSaved": false }));
    }

    #[test]
    fn article_tolerates_missing_optional_fields() {
        let article: Article =
            serde_json::from_str(r#"{"boardId":3,"title":"hi","content":"<p>x</p>"}"#)
                .expect("parse article");
        assert_eq!(article.nickname, "");
        assert!(!article.is_saved);
        assert_eq!(ArticleListItem::from(article).board_id, 3);
    }
}
