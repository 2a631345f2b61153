//! MandiChallenge 演示 API 服务
//!
//! 面向农产品市场商户的 REST API：价格查询、消息翻译、登录注册和商户资料。
//! 所有处理器返回固定或简单过滤后的演示数据，不读写数据库。
//!
//! ## 模块结构
//!
//! - `cli`: 命令行入口（serve / migrate）
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `middleware`: 安全头与 CORS
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod cli;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, Result};
pub use routes::build_router;
pub use state::{AppState, ServiceInfo};
