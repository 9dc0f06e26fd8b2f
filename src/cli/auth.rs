use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthFlow};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthFlow>>>, force: bool) {
    spotify::auth::auth(shared_state, force).await;
}
