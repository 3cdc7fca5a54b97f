//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - system_env: 进程环境变量
//! - paths: 文件读写工具

pub mod paths;
pub mod system_env;

pub use system_env::SystemEnv;
