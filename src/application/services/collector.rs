//! 环境变量收集服务

use crate::config::format::DotenvParser;
use crate::domain::error::{DomainError, LoadErrors, Result};
use crate::domain::models::{Binding, BindingList, MergeStrategy};
use crate::domain::repositories::EnvProvider;
use crate::infrastructure::paths;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 环境变量收集器：进程环境在前，配置文件在后
pub struct EnvCollector {
    provider: Arc<dyn EnvProvider>,
}

impl EnvCollector {
    pub fn new(provider: Arc<dyn EnvProvider>) -> Self {
        Self { provider }
    }

    /// 进程环境变量，按第一个 `=` 拆分，保持枚举顺序
    pub fn collect_process_environment(&self) -> BindingList {
        let list: BindingList = self
            .provider
            .entries()
            .iter()
            .map(|entry| Binding::from_entry(entry))
            .collect();
        debug!(count = list.len(), "收集进程环境变量");
        list
    }

    /// 解析单个配置文件
    pub fn load_file(&self, path: &str) -> Result<BindingList> {
        let content = paths::read_file(Path::new(path))?;
        let vars = DotenvParser::parse(&content, self.provider.as_ref())?;
        debug!(path, count = vars.len(), "解析配置文件");
        Ok(vars)
    }

    /// 按顺序解析所有配置文件
    ///
    /// 每个文件都会被读取和解析，失败逐个记录到 [`LoadErrors`] 中返回。
    /// `LastFile` 只保留最后一个文件的绑定，`Accumulate` 按顺序合并，
    /// 后出现的文件覆盖重复键的值。
    pub fn collect_config_files(
        &self,
        files: &[String],
        strategy: MergeStrategy,
    ) -> std::result::Result<BindingList, LoadErrors> {
        let mut merged = BindingList::new();
        let mut errors = LoadErrors::new();

        for path in files {
            let vars = match self.load_file(path) {
                Ok(vars) => vars,
                Err(err) => {
                    errors.push(path.as_str(), err);
                    continue;
                }
            };

            match strategy {
                MergeStrategy::LastFile => merged = vars,
                MergeStrategy::Accumulate => {
                    for binding in vars {
                        merged.upsert(binding);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(merged)
        } else {
            Err(errors)
        }
    }

    /// 完整收集：进程环境 + 配置文件
    pub fn collect(&self, files: &[String], strategy: MergeStrategy) -> Result<BindingList> {
        let mut list = self.collect_process_environment();
        let config = self
            .collect_config_files(files, strategy)
            .map_err(DomainError::Load)?;
        list.extend(config);
        Ok(list)
    }
}
