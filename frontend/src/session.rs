use dogcatdang_shared::UserInfo;
use web_sys::{window, Storage};

const USER_INFO_KEY: &str = "userInfo";
#[cfg(not(feature = "mock"))]
const ACCESS_TOKEN_KEY: &str = "accessToken";

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Signed-in user as stored by the login flow. Falls back to an empty
/// identity when nothing (or garbage) is stored.
pub fn user_info() -> UserInfo {
    local_storage()
        .and_then(|storage| storage.get_item(USER_INFO_KEY).ok().flatten())
        .and_then(|raw| match serde_json::from_str::<UserInfo>(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                web_sys::console::error_1(&format!("Invalid stored user info: {}", e).into());
                None
            },
        })
        .unwrap_or_default()
}

/// Bearer token saved by the login flow.
#[cfg(not(feature = "mock"))]
pub fn access_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}
