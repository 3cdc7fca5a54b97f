//! 配置文件格式

pub mod format;
