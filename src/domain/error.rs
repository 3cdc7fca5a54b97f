//! 领域层错误类型

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("文件不存在: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("权限不足: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("解析错误 (第 {line} 行): {message}")]
    Parse { line: usize, message: String },

    #[error("写入 {} 失败", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Load(LoadErrors),
}

impl DomainError {
    /// 构造解析错误
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        DomainError::Parse {
            line,
            message: message.into(),
        }
    }

    /// 读取文件时的 IO 错误，按错误类型归类
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DomainError::FileNotFound(path.into()),
            std::io::ErrorKind::PermissionDenied => DomainError::PermissionDenied(path.into()),
            _ => DomainError::Io(err),
        }
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        for line in self.report_lines(verbose) {
            eprintln!("{}", line);
        }
    }

    /// 生成错误报告的各行文本
    pub fn report_lines(&self, verbose: bool) -> Vec<String> {
        let mut lines = Vec::new();
        match self {
            DomainError::Load(errors) => {
                for (path, err) in errors.iter() {
                    match err {
                        // 错误信息本身已带路径
                        DomainError::FileNotFound(_) | DomainError::PermissionDenied(_) => {
                            lines.push(format!("❌ {}", err))
                        }
                        _ => lines.push(format!("❌ {}: {}", path, err)),
                    }
                    if verbose {
                        push_chain(&mut lines, err);
                    }
                }
            }
            _ if verbose => {
                lines.push(format!("❌ 错误: {}", self));
                push_chain(&mut lines, self);
            }
            DomainError::FileNotFound(path) => {
                lines.push(format!("文件不存在: {}", path.display()))
            }
            DomainError::Write { path, source } => {
                lines.push(format!("写入 {} 失败: {}", path.display(), source))
            }
            _ => lines.push(format!("错误: {}", self)),
        }
        lines
    }
}

fn push_chain(lines: &mut Vec<String>, err: &dyn Error) {
    if let Some(source) = err.source() {
        lines.push(format!("  └─ 原因: {}", source));
        let mut current = source.source();
        while let Some(next) = current {
            lines.push(format!("     └─ {}", next));
            current = next.source();
        }
    }
}

/// 逐个配置文件收集的加载错误
#[derive(Debug, Default)]
pub struct LoadErrors {
    errors: Vec<(String, DomainError)>,
}

impl LoadErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, err: DomainError) {
        self.errors.push((path.into(), err));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainError)> {
        self.errors.iter().map(|(p, e)| (p.as_str(), e))
    }
}

impl fmt::Display for LoadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(path, err)| format!("{}: {}", path, err))
            .collect();
        write!(f, "{} 个配置文件加载失败: {}", self.errors.len(), parts.join("; "))
    }
}

impl From<LoadErrors> for DomainError {
    fn from(errors: LoadErrors) -> Self {
        DomainError::Load(errors)
    }
}
