//! 测试工具模块
//!
//! 提供固定环境数据、临时配置文件和环境变量守卫

use crate::domain::repositories::EnvProvider;
use std::collections::HashMap;
use std::env;
use tempfile::TempDir;

/// 固定的环境变量来源，替代真实进程环境
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    entries: Vec<String>,
}

impl FixedEnv {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            entries: vars.iter().map(|(k, v)| format!("{}={}", k, v)).collect(),
        }
    }

    pub fn from_entries(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl EnvProvider for FixedEnv {
    fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }
}

/// 在临时目录中写入配置文件，返回路径字符串
pub fn write_env_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_deref() != Some(value.as_str()) {
                self.set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_env_lookup() {
        let env = FixedEnv::new(&[("A", "1"), ("B", "x=y")]);
        assert_eq!(env.lookup("B").as_deref(), Some("x=y"));
        assert_eq!(env.lookup("C"), None);
    }

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("ELENV_GUARD_VAR", "cleanup_test");
            assert_eq!(env::var("ELENV_GUARD_VAR").as_deref(), Ok("cleanup_test"));
        }
        // guard 被释放后，变量应该被清理
        assert!(env::var("ELENV_GUARD_VAR").is_err());
    }
}
