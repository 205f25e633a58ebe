//! 通知能力：把流水线结果上报给外部界面，保持核心逻辑可独立测试

use std::path::{Path, PathBuf};

use crate::model::template::{generate_template, TemplateError, TEMPLATE_DIR, TEMPLATE_SOURCE};

// === 常量定义（消除魔法值） ===
pub const TITLE_TEMPLATE_CREATED: &str = "模板已生成";
pub const MSG_TEMPLATE_CREATED: &str = "Template.json 已生成并保存到 Template 目录";
pub const TITLE_MISSING_FILE: &str = "缺少文件";
pub const TITLE_BAD_JSON: &str = "文件格式错误";
pub const TITLE_UNKNOWN_ERROR: &str = "未知错误";

/// 外部通知接口（界面弹窗、状态栏等都可实现）
pub trait Notifier {
    fn notify_success(&self, title: &str, message: &str);
    fn notify_error(&self, title: &str, message: &str);
}

/// 以结构化日志方式上报的默认实现
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, title: &str, message: &str) {
        tracing::info!("{}: {}", title, message);
    }

    fn notify_error(&self, title: &str, message: &str) {
        tracing::error!("{}: {}", title, message);
    }
}

/// 执行模板生成并把结果上报给通知器
///
/// 成功与三类失败（文件缺失、JSON无效、其他异常）各自对应一条通知；
/// 错误在上报之后仍会返回给调用方。
pub fn run_template_update(
    root: &Path,
    notifier: &dyn Notifier,
) -> Result<PathBuf, TemplateError> {
    match generate_template(root) {
        Ok(output) => {
            notifier.notify_success(TITLE_TEMPLATE_CREATED, MSG_TEMPLATE_CREATED);
            Ok(output)
        }
        Err(e) => {
            match &e {
                TemplateError::MissingInput(_) => notifier.notify_error(
                    TITLE_MISSING_FILE,
                    &format!(
                        "未在 {} 目录找到 {}",
                        root.join(TEMPLATE_DIR).display(),
                        TEMPLATE_SOURCE
                    ),
                ),
                TemplateError::Parse(parse) => notifier.notify_error(
                    TITLE_BAD_JSON,
                    &format!("无法解析 {}: {}，请确认它是有效的JSON文件", TEMPLATE_SOURCE, parse),
                ),
                other => notifier
                    .notify_error(TITLE_UNKNOWN_ERROR, &format!("发生意外错误: {}", other)),
            }
            Err(e)
        }
    }
}
