//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 环境变量收集（用例实现）

pub mod services;

pub use services::EnvCollector;
