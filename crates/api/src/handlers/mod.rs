//! HTTP 请求处理器

pub mod auth;
pub mod fallback;
pub mod health;
pub mod price_discovery;
pub mod translation;
pub mod vendor;
