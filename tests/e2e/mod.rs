//! Mandi 端到端测试
//!
//! 在本机随机端口启动完整服务，通过真实 HTTP 调用覆盖：
//! - 价格搜索与客户端离线回退
//! - 登录 / 注册 / 登出
//! - 翻译与兜底路由

pub mod setup;
pub mod suites;

pub use setup::TestEnvironment;
