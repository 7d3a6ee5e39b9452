//! Public types for the OAuth flow
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    // Optional so a missing code reaches the handler instead of
    // being rejected by the extractor
    pub code: Option<String>,
}
