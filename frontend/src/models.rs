// Mock data served by the `mock` build in place of the API.
#[cfg(feature = "mock")]
use std::cell::RefCell;

#[cfg(feature = "mock")]
use dogcatdang_shared::{
    AnimalSummary, ApiError, Article, ArticleListItem, ArticleListPage, ArticleSubmission,
};

#[cfg(feature = "mock")]
const MOCK_PAGE_SIZE: usize = 10;

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_ARTICLES: RefCell<Vec<Article>> = RefCell::new(seed_articles());
    static MOCK_LIKES: RefCell<Vec<(u64, bool)>> = const { RefCell::new(Vec::new()) };
}

#[cfg(feature = "mock")]
fn seed_articles() -> Vec<Article> {
    let samples = [
        ("입양 3개월 차, 초코 근황", "<h2>초코는 잘 지내요</h2><p>산책을 <strong>정말</strong> 좋아합니다.</p>"),
        ("임시 보호 일지", "<p>첫날은 조금 낯을 가렸지만 금방 적응했어요.</p>"),
        ("봉사 후기", "<p class=\"ql-align-center\">주말 봉사 다녀왔습니다.</p>"),
    ];
    samples
        .iter()
        .enumerate()
        .map(|(idx, (title, content))| Article {
            board_id: idx as u64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            nickname: "댕댕보호소".to_string(),
            is_saved: true,
            created_date: Some(format!("2024-03-{:02}", idx + 1)),
        })
        .collect()
}

/// Store or update a submitted article. Empty titles are rejected like the
/// real API does.
#[cfg(feature = "mock")]
pub fn mock_submit_article(submission: &ArticleSubmission) -> Result<(), ApiError> {
    if submission.data.title.trim().is_empty() {
        return Err(ApiError::Http {
            status: 400,
        });
    }

    MOCK_ARTICLES.with(|articles| {
        let mut articles = articles.borrow_mut();
        match submission
            .data
            .board_id
            .and_then(|id| articles.iter_mut().find(|a| a.board_id == id))
        {
            Some(existing) => {
                existing.title = submission.data.title.clone();
                existing.content = submission.data.content.clone();
                existing.is_saved = submission.data.is_saved;
            },
            None => {
                let board_id = articles.iter().map(|a| a.board_id).max().unwrap_or(0) + 1;
                articles.push(Article {
                    board_id,
                    title: submission.data.title.clone(),
                    content: submission.data.content.clone(),
                    nickname: submission.nickname.clone(),
                    is_saved: submission.data.is_saved,
                    created_date: None,
                });
            },
        }
    });
    Ok(())
}

#[cfg(feature = "mock")]
pub fn mock_article(id: u64) -> Option<Article> {
    MOCK_ARTICLES.with(|articles| articles.borrow().iter().find(|a| a.board_id == id).cloned())
}

/// Newest first, [`MOCK_PAGE_SIZE`] per page.
#[cfg(feature = "mock")]
pub fn mock_article_page(page: u32) -> ArticleListPage {
    MOCK_ARTICLES.with(|articles| {
        let articles = articles.borrow();
        let total_pages = articles.len().div_ceil(MOCK_PAGE_SIZE).max(1);
        let start = (page.max(1) as usize - 1) * MOCK_PAGE_SIZE;
        ArticleListPage {
            articles: articles
                .iter()
                .rev()
                .skip(start)
                .take(MOCK_PAGE_SIZE)
                .cloned()
                .map(ArticleListItem::from)
                .collect(),
            total_pages: total_pages as u32,
        }
    })
}

#[cfg(feature = "mock")]
pub fn mock_set_like(animal_id: u64, liked: bool) {
    MOCK_LIKES.with(|likes| {
        let mut likes = likes.borrow_mut();
        likes.retain(|(id, _)| *id != animal_id);
        likes.push((animal_id, liked));
    });
}

#[cfg(feature = "mock")]
pub fn mock_animals() -> Vec<AnimalSummary> {
    let likes = MOCK_LIKES.with(|likes| likes.borrow().clone());
    let samples = [
        ("개", "골든_리트리버", "3", "수컷", true, "서울 강남구 역삼동"),
        ("고양이", "코리안_숏헤어", "1", "암컷", false, "부산 해운대구 우동"),
        ("개", "믹스견", "5", "암컷", true, "대전 유성구"),
        ("고양이", "러시안_블루", "2", "수컷", false, "제주"),
    ];

    samples
        .iter()
        .enumerate()
        .map(|(idx, (kind, breed, age, gender, neutered, location))| {
            let animal_id = idx as u64 + 1;
            let like = likes
                .iter()
                .find(|(id, _)| *id == animal_id)
                .map(|(_, liked)| *liked)
                .unwrap_or(idx % 2 == 0);
            let mut parts = location.split(' ');
            AnimalSummary {
                animal_id,
                code: format!("DCD-2024-{:04}", animal_id),
                animal_type: kind.to_string(),
                breed: breed.to_string(),
                age: age.to_string(),
                weight: format!("{}kg", 3 + idx * 4),
                rescue_date: format!("2024-02-{:02}", idx + 10),
                selected_city: parts.next().unwrap_or_default().to_string(),
                selected_district: parts.next().unwrap_or_default().to_string(),
                detail_info: "사람을 좋아하고 산책을 즐깁니다.".to_string(),
                is_neuter: *neutered,
                gender: gender.to_string(),
                feature: "순함".to_string(),
                state: "보호중".to_string(),
                img_url: crate::config::asset_path(&format!("images/animal{}.jpg", animal_id)),
                user_nickname: "댕댕보호소".to_string(),
                like,
                rescue_location: location.to_string(),
                adoption_applicant_count: (idx * 3) as u32,
            }
        })
        .collect()
}
