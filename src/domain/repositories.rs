//! 外部环境接口（输出端口）

/// 进程环境变量来源
///
/// 生产代码使用 `infrastructure::SystemEnv`，测试中替换为固定数据。
pub trait EnvProvider {
    /// 以 `KEY=VALUE` 形式枚举全部条目，顺序由实现决定
    fn entries(&self) -> Vec<String>;

    /// 查找单个变量
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries().into_iter().find_map(|entry| {
            entry
                .split_once('=')
                .filter(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }
}
