//! 测试套件模块

pub mod auth_flow;
pub mod price_flow;
pub mod routing;
