//! .env 格式解析器 (兼容 godotenv 的语法)

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Binding, BindingList};
use crate::domain::repositories::EnvProvider;

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：KEY=VALUE 或 KEY: VALUE，可带 `export ` 前缀
    /// - 无引号的值到行尾为止，` # ...` 视为行尾注释
    /// - 单引号值按字面量处理，双引号值解析转义并展开 `$VAR` / `${VAR}`
    /// - 引号值可以跨行
    /// - 同一文件内重复的键覆盖前值，位置保持首次出现处
    ///
    /// 变量展开先查本文件已定义的键，再查 `env`，都没有则为空串。
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Parse`] with the offending line for invalid keys,
    /// missing separators and unterminated quotes.
    pub fn parse(content: &str, env: &dyn EnvProvider) -> Result<BindingList> {
        let src = content.replace("\r\n", "\n");
        let mut cursor = Cursor {
            rest: &src,
            line: 1,
        };
        let mut vars = BindingList::new();

        while cursor.next_statement() {
            let key = cursor.read_key()?;
            let value = cursor.read_value(&vars, env)?;
            vars.upsert(Binding::new(key, value));
        }

        Ok(vars)
    }
}

struct Cursor<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// 跳过空白和注释，还有语句时返回 true
    fn next_statement(&mut self) -> bool {
        loop {
            let rest = self.rest;
            let start = rest.find(|ch: char| !ch.is_whitespace());
            let skipped = &rest[..start.unwrap_or(rest.len())];
            self.line += skipped.matches('\n').count();

            let Some(start) = start else {
                self.rest = "";
                return false;
            };
            let rest = &rest[start..];
            self.rest = rest;

            if !rest.starts_with('#') {
                return true;
            }
            match rest.find('\n') {
                Some(end) => self.rest = &rest[end..],
                None => {
                    self.rest = "";
                    return false;
                }
            }
        }
    }

    fn read_key(&mut self) -> Result<String> {
        self.trim_export();
        let rest = self.rest;

        for (index, ch) in rest.char_indices() {
            match ch {
                '=' | ':' => {
                    let key = rest[..index].trim_end_matches(is_blank);
                    if key.is_empty() {
                        return Err(DomainError::parse(self.line, "空的键名"));
                    }
                    if key.contains(is_blank) {
                        return Err(DomainError::parse(
                            self.line,
                            format!("键名中不能包含空白: '{key}'"),
                        ));
                    }
                    self.rest = rest[index + 1..].trim_start_matches(is_blank);
                    return Ok(key.to_string());
                }
                '\n' => break,
                c if is_blank(c) || c.is_alphanumeric() || c == '_' || c == '.' => {}
                c => {
                    return Err(DomainError::parse(
                        self.line,
                        format!("键名中出现非法字符 '{c}'"),
                    ));
                }
            }
        }

        let statement = rest.lines().next().unwrap_or_default();
        Err(DomainError::parse(
            self.line,
            format!("缺少 '=' 分隔符: '{statement}'"),
        ))
    }

    fn trim_export(&mut self) {
        let rest = self.rest;
        if let Some(left) = rest.strip_prefix("export")
            && left.starts_with(is_blank)
        {
            self.rest = left.trim_start_matches(is_blank);
        }
    }

    fn read_value(&mut self, vars: &BindingList, env: &dyn EnvProvider) -> Result<String> {
        let quote = match self.rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Ok(self.read_unquoted()),
        };

        let start_line = self.line;
        let rest = self.rest;
        let body = &rest[1..];
        let mut prev_backslash = false;

        for (index, ch) in body.char_indices() {
            if ch == quote && !prev_backslash {
                let raw = &body[..index];
                self.line += raw.matches('\n').count();
                self.rest = &body[index + 1..];

                return Ok(if quote == '"' {
                    expand(raw, vars, env)
                } else {
                    raw.to_string()
                });
            }
            prev_backslash = ch == '\\' && !prev_backslash;
        }

        Err(DomainError::parse(
            start_line,
            format!("未闭合的引号 {quote}"),
        ))
    }

    fn read_unquoted(&mut self) -> String {
        let rest = self.rest;
        let end_of_line = rest.find('\n').unwrap_or(rest.len());
        let line = &rest[..end_of_line];
        self.rest = &rest[end_of_line..];

        // 从行尾向前找第一个前面是空白的 #
        let mut end_of_value = line.len();
        let mut prev: Option<char> = None;
        for (index, ch) in line.char_indices().rev() {
            if prev == Some('#') && is_blank(ch) {
                end_of_value = index;
                break;
            }
            prev = Some(ch);
        }

        line[..end_of_value].trim_end_matches(is_blank).to_string()
    }
}

/// 双引号值：处理转义并展开变量
fn expand(raw: &str, vars: &BindingList, env: &dyn EnvProvider) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, 'n')) => out.push('\n'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, other)) => out.push(other),
                None => out.push('\\'),
            },
            '$' => {
                let rest = &raw[index + 1..];
                let (name, consumed) = if let Some(braced) = rest.strip_prefix('{') {
                    let len = ident_len(braced);
                    if len > 0 && braced[len..].starts_with('}') {
                        (&braced[..len], len + 2)
                    } else {
                        ("", 0)
                    }
                } else {
                    let len = ident_len(rest);
                    (&rest[..len], len)
                };

                if name.is_empty() {
                    out.push('$');
                    continue;
                }
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&env.lookup(name).unwrap_or_default()),
                }
                for _ in 0..rest[..consumed].chars().count() {
                    chars.next();
                }
            }
            c => out.push(c),
        }
    }

    out
}

fn ident_len(src: &str) -> usize {
    src.find(|ch: char| !ch.is_ascii_alphanumeric() && ch != '_')
        .unwrap_or(src.len())
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0B' | '\x0C' | '\r')
}
