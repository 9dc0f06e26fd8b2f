mod auth;
mod session;

pub use auth::TokenError;
pub use auth::TokenManager;
pub use session::PlaySession;
