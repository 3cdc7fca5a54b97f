//! 包名模型

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 连续的非法字符（ASCII 单词字符、`-`、`_` 之外）
static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_-]+").expect("包名正则无效"));

/// 生成的 elisp 包名，同时用作输出文件名和符号前缀
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub const DEFAULT: &'static str = "env";

    /// 清洗任意输入：每段连续非法字符替换为单个 `-`，空结果回退到默认值
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let cleaned = INVALID_RUN.replace_all(raw, "-");
        if cleaned.is_empty() {
            Self::default()
        } else {
            Self(cleaned.into_owned())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 输出文件名 `<package>.el`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.el", self.0)
    }
}

impl Default for PackageName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
