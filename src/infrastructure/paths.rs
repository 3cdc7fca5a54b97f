//! 文件读写工具

use crate::domain::error::{DomainError, Result};
use crate::domain::models::PackageName;
use std::path::{Path, PathBuf};

/// 读取配置文件内容
///
/// 空路径（例如 `-f a.env,` 末尾逗号产生的）同样按文件不存在处理。
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| DomainError::from_read(path, e))
}

/// 输出文件路径 `<dir>/<package>.el`
#[must_use]
pub fn module_path(dir: &Path, package: &PackageName) -> PathBuf {
    dir.join(package.file_name())
}

/// 写入生成的模块，已存在时直接覆盖（非原子写入）
pub fn write_module(dir: &Path, package: &PackageName, content: &str) -> Result<PathBuf> {
    let path = module_path(dir, package);
    std::fs::write(&path, content).map_err(|source| DomainError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
