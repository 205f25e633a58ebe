//! 模板生成：读取占位符模板，重写路径后输出正式模板文件

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::model::path_rewrite::rewrite_paths;
use crate::utils::fs::{read_json_file, write_json_file};

/// 模板目录名（相对于工作根目录）
pub const TEMPLATE_DIR: &str = "Template";
/// 带占位符的模板源文件
pub const TEMPLATE_SOURCE: &str = "DO NOT TOUCH.json";
/// 重写后输出的正式模板文件
pub const TEMPLATE_OUTPUT: &str = "Template.json";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("模板源文件不存在: {0}")]
    MissingInput(PathBuf),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 读取模板源文件，重写占位符路径后写出正式模板
///
/// 基准目录取 `root` 本身。源文件缺失或解析失败时直接返回错误，
/// 不会产生部分输出。
pub fn generate_template(root: &Path) -> Result<PathBuf, TemplateError> {
    let template_dir = root.join(TEMPLATE_DIR);
    let source = template_dir.join(TEMPLATE_SOURCE);
    let output = template_dir.join(TEMPLATE_OUTPUT);

    let dom = match read_json_file(&source) {
        Err(TemplateError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(TemplateError::MissingInput(source));
        }
        other => other?,
    };

    let base = root.to_string_lossy();
    let rewritten = rewrite_paths(&dom, &base);
    write_json_file(&output, &rewritten)?;

    tracing::info!("模板已生成: {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    /// 在临时根目录下创建 Template 目录及源文件
    fn create_template_root(source_content: &str) -> TempDir {
        let root = TempDir::new().expect("创建临时目录失败");
        let template_dir = root.path().join(TEMPLATE_DIR);
        std::fs::create_dir(&template_dir).expect("创建Template目录失败");
        std::fs::write(template_dir.join(TEMPLATE_SOURCE), source_content)
            .expect("写入模板源文件失败");
        root
    }

    #[test]
    fn test_generate_template_rewrites_paths() {
        let root = create_template_root(
            r#"{"path": "x/assets/logo.png", "count": 3, "tags": ["x/a", "keep"]}"#,
        );

        let output = generate_template(root.path()).expect("模板生成应该成功");
        assert_eq!(output, root.path().join(TEMPLATE_DIR).join(TEMPLATE_OUTPUT));

        let text = std::fs::read_to_string(&output).expect("读取输出文件失败");
        let v: serde_json::Value = serde_json::from_str(&text).expect("输出应该是有效JSON");

        let sep = std::path::MAIN_SEPARATOR;
        let base = crate::model::path_rewrite::normalize_base(&root.path().to_string_lossy());
        let expected = json!({
            "path": format!("{}{}assets/logo.png", base, sep),
            "count": 3,
            "tags": [format!("{}{}a", base, sep), "keep"]
        });
        assert_eq!(v, expected, "占位符路径应该被重写为根目录下的真实路径");
    }

    #[test]
    fn test_output_is_four_space_indented() {
        let root = create_template_root(r#"{"nested": {"deep": ["x/", "no-match"]}}"#);

        let output = generate_template(root.path()).expect("模板生成应该成功");
        let text = std::fs::read_to_string(&output).expect("读取输出文件失败");

        assert!(text.contains("\n    \"nested\""), "输出应该使用4空格缩进");
        assert!(text.contains("\n        \"deep\""), "嵌套层级应该逐级加深缩进");
    }

    #[test]
    fn test_missing_source_file() {
        let root = TempDir::new().expect("创建临时目录失败");
        std::fs::create_dir(root.path().join(TEMPLATE_DIR)).expect("创建Template目录失败");

        let result = generate_template(root.path());
        match result {
            Err(TemplateError::MissingInput(p)) => {
                assert!(p.ends_with(TEMPLATE_SOURCE), "错误应该携带缺失的源文件路径");
            }
            other => panic!("缺少源文件应该返回MissingInput，实际: {:?}", other),
        }

        let output = root.path().join(TEMPLATE_DIR).join(TEMPLATE_OUTPUT);
        assert!(!output.exists(), "失败时不应该产生输出文件");
    }

    #[test]
    fn test_malformed_source_file() {
        let root = create_template_root("{not valid json");

        let result = generate_template(root.path());
        assert!(
            matches!(result, Err(TemplateError::Parse(_))),
            "无效JSON应该返回解析错误"
        );

        let output = root.path().join(TEMPLATE_DIR).join(TEMPLATE_OUTPUT);
        assert!(!output.exists(), "解析失败时不应该产生输出文件");
    }

    #[test]
    fn test_source_without_placeholders() {
        let root = create_template_root(r#"{"count": 3, "keep": ["a", "b"]}"#);

        let output = generate_template(root.path()).expect("模板生成应该成功");
        let text = std::fs::read_to_string(&output).expect("读取输出文件失败");
        let v: serde_json::Value = serde_json::from_str(&text).expect("输出应该是有效JSON");

        assert_eq!(
            v,
            json!({"count": 3, "keep": ["a", "b"]}),
            "不含占位符的模板应该原样输出"
        );
    }
}
