pub mod dto;
pub mod jwt;
pub mod service;

pub use dto::{RefreshTokenRequest, TokenResponse};
pub use jwt::{generate_refresh_token, Claims, JwtManager};
pub use service::AuthService;
