//! 绑定实体模型

use std::fmt;

/// 单个环境变量绑定，输出为 Lisp 点对 `(KEY . "VALUE")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub value: String,
}

impl Binding {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// 按第一个 `=` 拆分 `KEY=VALUE`，值中的其余 `=` 保留
    #[must_use]
    pub fn from_entry(entry: &str) -> Self {
        match entry.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self::new(entry, ""),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} . \"{}\")", self.key, escape_lisp_string(&self.value))
    }
}

/// 转义 Lisp 字符串字面量中的 `"` 和 `\`
fn escape_lisp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// 有序绑定列表，保留插入顺序，允许重复键
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingList(Vec<Binding>);

impl BindingList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: Binding) {
        self.0.push(binding);
    }

    /// 追加或原位覆盖同名键（单个文件内键唯一）
    pub fn upsert(&mut self, binding: Binding) {
        match self.0.iter_mut().find(|b| b.key == binding.key) {
            Some(existing) => existing.value = binding.value,
            None => self.0.push(binding),
        }
    }

    pub fn extend(&mut self, other: BindingList) {
        self.0.extend(other.0);
    }

    /// 查找最后一次出现的键
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|b| b.key == key)
            .map(|b| b.value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.0.iter()
    }
}

impl FromIterator<Binding> for BindingList {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BindingList {
    type Item = Binding;
    type IntoIter = std::vec::IntoIter<Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for BindingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("()");
        }
        let pairs: Vec<String> = self.iter().map(ToString::to_string).collect();
        write!(f, "({})", pairs.join(" "))
    }
}

/// 多个配置文件的合并策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// 只保留最后一个文件的绑定（兼容旧行为）
    #[default]
    LastFile,
    /// 按参数顺序累积所有文件，后者覆盖重复键
    Accumulate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_splits_at_first_equals() {
        let b = Binding::from_entry("OPTS=a=b=c");
        assert_eq!(b.key, "OPTS");
        assert_eq!(b.value, "a=b=c");
    }

    #[test]
    fn test_from_entry_without_equals() {
        let b = Binding::from_entry("LONELY");
        assert_eq!(b, Binding::new("LONELY", ""));
    }

    #[test]
    fn test_display_pair() {
        assert_eq!(Binding::new("A", "1").to_string(), "(A . \"1\")");
    }

    #[test]
    fn test_display_escapes_quotes_and_backslashes() {
        let b = Binding::new("MSG", r#"say "hi" C:\tmp"#);
        assert_eq!(b.to_string(), r#"(MSG . "say \"hi\" C:\\tmp")"#);
    }

    #[test]
    fn test_list_display() {
        let list: BindingList = vec![Binding::new("A", "1"), Binding::new("B", "2")]
            .into_iter()
            .collect();
        assert_eq!(list.to_string(), r#"((A . "1") (B . "2"))"#);
        assert_eq!(BindingList::new().to_string(), "()");
    }

    #[test]
    fn test_upsert_keeps_first_position() {
        let mut list = BindingList::new();
        list.upsert(Binding::new("A", "1"));
        list.upsert(Binding::new("B", "2"));
        list.upsert(Binding::new("A", "3"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), r#"((A . "3") (B . "2"))"#);
    }

    #[test]
    fn test_push_allows_duplicates() {
        let mut list = BindingList::new();
        list.push(Binding::new("A", "1"));
        list.push(Binding::new("A", "2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("A"), Some("2"));
    }
}
