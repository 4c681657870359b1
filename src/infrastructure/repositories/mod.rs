pub mod feed_repository;
pub mod feed_suggestions_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod refresh_token_repository;
pub mod tts_repository;
pub mod usage_repository;
pub mod user_repository;

pub use feed_repository::FeedRepository;
pub use feed_suggestions_repository::HardcodedFeedSuggestionsRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use refresh_token_repository::RefreshTokenRepository;
pub use tts_repository::TtsRepository;
pub use usage_repository::{UsageRecord, UsageRepository};
pub use user_repository::UserRepository;
