#[cfg(not(feature = "mock"))]
use dogcatdang_shared::{storage, PresignedUrl, SubmitMethod};
use dogcatdang_shared::{AnimalSummary, ApiError, Article, ArticleListPage, ArticleSubmission};
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(not(feature = "mock"))]
use js_sys::Date;

#[cfg(not(feature = "mock"))]
use crate::{
    config::{API_BASE, PRESIGN_PATH},
    session,
};
#[cfg(feature = "mock")]
use crate::models;

#[cfg(not(feature = "mock"))]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

#[cfg(not(feature = "mock"))]
fn parse_error(e: gloo_net::Error) -> ApiError {
    ApiError::Parse(format!("{:?}", e))
}

#[cfg(not(feature = "mock"))]
fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

/// Attach the bearer token of the signed-in user, if any.
#[cfg(not(feature = "mock"))]
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

#[cfg(not(feature = "mock"))]
fn no_cache(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
}

/// 게시글 작성/수정. `POST /boards` creates, `PUT /boards/{id}` updates.
pub async fn request_article(submission: &ArticleSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_submit_article(submission);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = match submission.data.board_id {
            Some(id) => format!("{}/boards/{}", API_BASE, id),
            None => format!("{}/boards", API_BASE),
        };
        let builder = match submission.method {
            SubmitMethod::Post => Request::post(&url),
            SubmitMethod::Put => Request::put(&url),
        };

        let response = authorized(builder)
            .header("Content-Type", "application/json")
            .header("X-User-Nickname", &urlencoding::encode(&submission.nickname))
            .json(&submission.data)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        ensure_ok(&response)
    }
}

/// 게시글 목록 (1-based page)
pub async fn fetch_articles(page: u32) -> Result<ArticleListPage, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_article_page(page));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/boards?page={}&_ts={}", API_BASE, page, Date::now() as u64);
        let response = no_cache(authorized(Request::get(&url)))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&response)?;

        response.json().await.map_err(parse_error)
    }
}

/// 게시글 상세
pub async fn fetch_article(id: u64) -> Result<Option<Article>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_article(id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/boards/{}?_ts={}", API_BASE, id, Date::now() as u64);
        let response = no_cache(authorized(Request::get(&url)))
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == 404 {
            return Ok(None);
        }
        ensure_ok(&response)?;

        response.json().await.map(Some).map_err(parse_error)
    }
}

/// 보호 동물 목록
pub async fn fetch_saved_animals() -> Result<Vec<AnimalSummary>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_animals());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/animals?_ts={}", API_BASE, Date::now() as u64);
        let response = no_cache(authorized(Request::get(&url)))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&response)?;

        response.json().await.map_err(parse_error)
    }
}

/// 보호 동물 상세
pub async fn fetch_saved_animal(id: u64) -> Result<Option<AnimalSummary>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_animals().into_iter().find(|a| a.animal_id == id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/animals/{}?_ts={}", API_BASE, id, Date::now() as u64);
        let response = no_cache(authorized(Request::get(&url)))
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == 404 {
            return Ok(None);
        }
        ensure_ok(&response)?;

        response.json().await.map(Some).map_err(parse_error)
    }
}

/// Persist a like (`POST`) or unlike (`DELETE`) for one animal.
pub async fn set_animal_like(animal_id: u64, liked: bool) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        models::mock_set_like(animal_id, liked);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/animals/{}/like", API_BASE, animal_id);
        let builder = if liked { Request::post(&url) } else { Request::delete(&url) };
        let response = authorized(builder).send().await.map_err(network_error)?;

        ensure_ok(&response)
    }
}

/// Ask the API for a presigned upload URL for `file_name`.
#[cfg(not(feature = "mock"))]
pub async fn fetch_presigned_url(file_name: &str) -> Result<String, ApiError> {
    let url = format!(
        "{}{}?fileName={}",
        API_BASE,
        PRESIGN_PATH,
        urlencoding::encode(file_name)
    );
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(network_error)?;
    ensure_ok(&response)?;

    let presigned: PresignedUrl = response.json().await.map_err(parse_error)?;
    Ok(presigned.url)
}

/// Upload an image to object storage and return its permanent URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    #[cfg(feature = "mock")]
    {
        return web_sys::Url::create_object_url_with_blob(file)
            .map_err(|e| ApiError::Network(format!("{:?}", e)));
    }

    #[cfg(not(feature = "mock"))]
    {
        let file_name = storage::object_file_name(&file.name(), Date::now() as u64);
        let presigned = fetch_presigned_url(&file_name).await?;

        let content_type = file.type_();
        let mut builder = Request::put(&presigned);
        if !content_type.is_empty() {
            builder = builder.header("Content-Type", &content_type);
        }
        let response = builder
            .body(file.clone())
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&response)?;

        Ok(storage::public_url(&presigned).to_string())
    }
}
