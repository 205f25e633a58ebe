//! 路径重写：递归遍历JSON树，将占位符路径替换为真实基准目录

use std::path::MAIN_SEPARATOR;

use serde_json::Value;

/// 模板字符串中的路径占位符
pub const PATH_PLACEHOLDER: &str = "x/";

/// 递归重写JSON树中的占位符路径
///
/// 对象与数组逐项递归，键名与元素顺序保持不变；包含占位符的字符串叶子
/// 将所有 `x/` 替换为规范化后的基准目录加分隔符，其余标量原样返回。
/// 不修改输入，总是产生新的等价树。
pub fn rewrite_paths(tree: &Value, base_path: &str) -> Value {
    match tree {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), rewrite_paths(v, base_path)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items.iter().map(|item| rewrite_paths(item, base_path)).collect(),
        ),
        Value::String(s) if s.contains(PATH_PLACEHOLDER) => {
            Value::String(s.replace(PATH_PLACEHOLDER, &base_with_separator(base_path)))
        }
        other => other.clone(),
    }
}

/// 规范化基准目录并追加平台分隔符，作为占位符的替换文本
fn base_with_separator(base_path: &str) -> String {
    format!("{}{}", normalize_base(base_path), MAIN_SEPARATOR)
}

/// 按平台约定规范化目录路径
///
/// 规则：
/// - Windows 上先把 `/` 统一为 `\`
/// - 折叠重复分隔符，去掉 `.` 片段与末尾分隔符
/// - 绝对路径中的 `..` 不会越过根；相对路径保留开头的 `..`
/// - 空输入退化为 `.`
///
/// 纯字符串运算，不访问文件系统，也不检查路径是否存在。
pub fn normalize_base(path: &str) -> String {
    let sep = MAIN_SEPARATOR;
    let unified = if cfg!(windows) {
        path.replace('/', "\\")
    } else {
        path.to_string()
    };

    let is_absolute = unified.starts_with(sep);

    let mut parts: Vec<&str> = Vec::new();
    for part in unified.split(sep) {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(&last) if last != "..") {
                    parts.pop();
                } else if !is_absolute {
                    parts.push("..");
                }
            }
            p => parts.push(p),
        }
    }

    let body = parts.join(&sep.to_string());
    if is_absolute {
        format!("{}{}", sep, body)
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
