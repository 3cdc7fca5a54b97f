//! CLI 参数定义

use crate::domain::models::{MergeStrategy, PackageName};
use clap::Parser;
use std::path::PathBuf;

/// elenv - 把环境变量生成为 elisp 包
#[derive(Parser, Debug)]
#[command(
    name = "elenv",
    version,
    about = "把进程环境变量和 .env 文件生成为 elisp 包",
    long_about = "收集进程环境变量和 .env 配置文件中的变量，生成 <package>.el，\n其中 <package>/env 是按顺序排列的 alist"
)]
pub struct Cli {
    /// 生成的 elisp 包名
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// 逗号分隔的 .env 文件列表，可重复指定
    #[arg(short, long, value_name = "FILES")]
    pub files: Vec<String>,

    /// 输出目录
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// 合并所有配置文件（默认只保留最后一个文件的变量）
    #[arg(long)]
    pub merge: bool,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

/// 运行配置，解析参数后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub package: PackageName,
    pub files: Vec<String>,
    pub output_dir: PathBuf,
    pub merge: MergeStrategy,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: PackageName::default(),
            files: Vec::new(),
            output_dir: PathBuf::from("."),
            merge: MergeStrategy::default(),
            verbose: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            package: cli
                .package
                .as_deref()
                .map(PackageName::sanitize)
                .unwrap_or_default(),
            files: split_file_list(&cli.files),
            output_dir: cli.output_dir,
            merge: if cli.merge {
                MergeStrategy::Accumulate
            } else {
                MergeStrategy::LastFile
            },
            verbose: cli.verbose,
        }
    }
}

/// 按 `,` 拆分每个 `-f` 参数，保留空段
pub fn split_file_list(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let argv = std::iter::once("elenv").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn test_package_is_sanitized() {
        assert_eq!(config(&["-p", "my pkg!"]).package.as_str(), "my-pkg-");
        assert_eq!(config(&["-p", ""]).package.as_str(), "env");
    }

    #[test]
    fn test_files_split_and_appended() {
        let cfg = config(&["-f", "a.env,b.env,", "-f", "c.env"]);
        assert_eq!(cfg.files, vec!["a.env", "b.env", "", "c.env"]);
    }

    #[test]
    fn test_merge_flag() {
        assert_eq!(config(&["--merge"]).merge, MergeStrategy::Accumulate);
        assert_eq!(config(&[]).merge, MergeStrategy::LastFile);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["elenv", "-x"]).is_err());
    }
}
