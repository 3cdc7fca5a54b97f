//! elenv - 把环境变量生成为 elisp 包
//!
//! 三个阶段依次执行：参数解析 → 环境收集 → 代码生成

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 配置文件格式
pub mod config;

// elisp 模板
pub mod template;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use app::Application;
pub use cli::{Cli, Config};
pub use domain::{
    Binding, BindingList, DomainError, EnvProvider, LoadErrors, MergeStrategy, PackageName, Result,
};
