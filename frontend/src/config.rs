//! Compile-time configuration for the frontend application

/// Base URL for static assets, `DOGCATDANG_BASE_URL` at compile time.
/// - For local development: "/"
/// - For hosting under a sub path: e.g. "/dogcatdang/"
#[cfg(feature = "mock")]
pub const BASE_URL: &str = match option_env!("DOGCATDANG_BASE_URL") {
    Some(url) => url,
    None => "/",
};

/// API base URL, read from `DOGCATDANG_API_BASE` at compile time.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("DOGCATDANG_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8084/api",
};

/// Path under [`API_BASE`] that hands out presigned upload URLs.
#[cfg(not(feature = "mock"))]
pub const PRESIGN_PATH: &str = "/s3/presigned-url";

/// Helper function to construct asset paths
#[cfg(feature = "mock")]
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
