use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    types::{AuthFlow, Token},
    utils, warning,
};

// The fragment only exists in the browser; this page forwards it verbatim as
// the query string of /token. location.replace keeps the token-bearing URL
// out of the address bar and the browser history.
const RELAY_PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <p>Completing authorization...</p>
    <script>
      var fragment = window.location.hash.replace(/^#/, "");
      if (fragment) {
        window.location.replace("/token?" + fragment);
      } else {
        document.body.innerHTML = "<h4>Missing token fragment.</h4>";
      }
    </script>
  </body>
</html>"#;

pub async fn callback() -> Html<&'static str> {
    Html(RELAY_PAGE)
}

pub async fn token(
    RawQuery(query): RawQuery,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthFlow>>>>,
) -> Html<&'static str> {
    let Some(raw) = query else {
        return Html("<h4>Missing token fragment.</h4>");
    };

    let Some(fragment) = utils::parse_token_fragment(&raw) else {
        return Html("<h4>Missing access token.</h4>");
    };

    let mut state = shared_state.lock().await;
    // Take the expected state from the flow started by the auth command
    let Some(ref mut flow) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    if fragment.state.as_deref() != Some(flow.csrf_state.as_str()) {
        warning!("Redirect carried an unexpected state value, discarding token.");
        return Html("<h4>State mismatch.</h4>");
    }

    flow.token = Some(Token {
        access_token: fragment.access_token,
        token_type: fragment.token_type,
        expires_in: fragment.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    });

    Html("<h2>Authorization successful.</h2><p>Close browser window.</p>")
}
