pub mod auth;
pub mod feed;
pub mod feed_suggestions;
pub mod shared;
pub mod tts;
pub mod user;
