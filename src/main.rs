//! elenv 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给 `Application`
//! - 安静模式：默认无输出，成功静默
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use elenv::{Application, Cli, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    let config = Config::from(cli);

    init_logging(config.verbose);

    let verbose = config.verbose;
    if let Err(e) = Application::new(config).run() {
        e.report(verbose);
        std::process::exit(1);
    }
}

/// 初始化日志：优先使用 RUST_LOG，否则按 --verbose 选择级别
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
