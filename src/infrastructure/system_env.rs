//! 进程环境变量读取

use crate::domain::repositories::EnvProvider;

/// 读取当前进程的环境变量
///
/// 非 UTF-8 的键或值按 lossy 方式转换。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn entries(&self) -> Vec<String> {
        std::env::vars_os()
            .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
            .collect()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_entries_match_process_environment() {
        let guard = EnvGuard::new();
        guard.set_var("ELENV_SYSTEM_TEST", "a=b=c");

        let entries = SystemEnv.entries();
        assert_eq!(entries.len(), std::env::vars_os().count());
        assert!(entries.contains(&"ELENV_SYSTEM_TEST=a=b=c".to_string()));
    }

    #[test]
    #[serial]
    fn test_lookup() {
        let guard = EnvGuard::new();
        guard.set_var("ELENV_LOOKUP_TEST", "value");
        guard.remove_var("ELENV_LOOKUP_MISSING");

        assert_eq!(SystemEnv.lookup("ELENV_LOOKUP_TEST").as_deref(), Some("value"));
        assert_eq!(SystemEnv.lookup("ELENV_LOOKUP_MISSING"), None);
    }
}
