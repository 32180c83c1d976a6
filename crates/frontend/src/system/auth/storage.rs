use contracts::system::auth::CachedUser;
use web_sys::window;

const USER_DATA_KEY: &str = "user_data";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save user info to localStorage
pub fn save_user(user: &CachedUser) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(raw) => {
            let _ = storage.set_item(USER_DATA_KEY, &raw);
        }
        Err(e) => log::error!("Failed to serialize cached user: {}", e),
    }
}

/// Get cached user info; unreadable entries count as absent
pub fn get_user() -> Option<CachedUser> {
    let raw = get_local_storage()?.get_item(USER_DATA_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear cached user info
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_DATA_KEY);
    }
}
