//! 应用程序容器
//!
//! 负责依赖注入，串联收集、渲染、写入三个阶段

use crate::application::EnvCollector;
use crate::cli::Config;
use crate::domain::error::Result;
use crate::domain::repositories::EnvProvider;
use crate::infrastructure::{SystemEnv, paths};
use crate::template;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// 应用程序容器
pub struct Application {
    config: Config,
    collector: EnvCollector,
}

impl Application {
    /// 使用真实进程环境创建
    pub fn new(config: Config) -> Self {
        Self::with_provider(config, Arc::new(SystemEnv))
    }

    /// 注入自定义环境来源
    pub fn with_provider(config: Config, provider: Arc<dyn EnvProvider>) -> Self {
        Self {
            config,
            collector: EnvCollector::new(provider),
        }
    }

    /// 生成模块文本（不写文件）
    pub fn generate(&self) -> Result<String> {
        let bindings = self
            .collector
            .collect(&self.config.files, self.config.merge)?;
        debug!(package = %self.config.package, count = bindings.len(), "渲染 elisp 模块");
        Ok(template::render(&self.config.package, &bindings))
    }

    /// 执行完整流程，返回写入的文件路径
    pub fn run(&self) -> Result<PathBuf> {
        let code = self.generate()?;
        let path = paths::write_module(&self.config.output_dir, &self.config.package, &code)?;
        info!(path = %path.display(), "已生成");
        Ok(path)
    }
}
