//! Domain Layer - 核心数据与接口
//!
//! 包含：
//! - models: 领域实体
//! - repositories: 外部环境接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, LoadErrors, Result};
pub use models::{Binding, BindingList, MergeStrategy, PackageName};
pub use repositories::EnvProvider;
