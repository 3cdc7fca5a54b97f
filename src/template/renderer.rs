//! 模板渲染器

use crate::domain::models::{BindingList, PackageName};
use crate::template::ELISP_MODULE;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

// 匹配 {{VAR}}
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("占位符正则无效"));

/// 渲染完整的 elisp 模块
#[must_use]
pub fn render(package: &PackageName, bindings: &BindingList) -> String {
    let env = bindings.to_string();
    let vars = HashMap::from([("package", package.as_str()), ("env", env.as_str())]);
    fill(ELISP_MODULE, &vars)
}

/// 替换模板中的 `{{name}}` 占位符
///
/// 单次扫描，替换进来的文本不会被再次展开；未知占位符原样保留。
#[must_use]
pub fn fill(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].trim();
            match vars.get(name) {
                Some(value) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
