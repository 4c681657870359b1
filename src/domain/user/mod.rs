pub mod dto;
pub mod model;
pub mod service;

pub use dto::{MeResponse, UpdateMeRequest, UpdateSettingsDto};
pub use model::{SubscriptionStatus, SubscriptionTier, User, UserSettings};
pub use service::UserService;
