//! elisp 模块模板
//!
//! # 模板语法
//!
//! ```text
//! (defvar {{package}}/env {{env}} "docstring")
//! ```
//!
//! `{{name}}` 占位符由 [`renderer::fill`] 一次性替换。

pub mod renderer;

pub use renderer::render;

/// 生成的 elisp 包模板
pub const ELISP_MODULE: &str = r#";; Code automatically generated with //
(defvar {{package}}/env {{env}} "docstring")

(defun {{package}}/get (name)
)

(provide '{{package}})
"#;
