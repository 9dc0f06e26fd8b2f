use crate::{management::TokenManager, success, warning};

pub async fn logout() {
    match TokenManager::clear().await {
        Ok(()) => success!("Cached token removed."),
        Err(e) => warning!("No cached token to remove ({}).", e),
    }
}
