//! 桌面模板工具库
//!
//! 提供JSON模板的占位符路径重写、主题配色表与PNG图片清空功能
//! 核心重写逻辑为纯函数，文件IO与通知均在外层完成

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::path_rewrite::{normalize_base, rewrite_paths, PATH_PLACEHOLDER};
pub use model::template::{generate_template, TemplateError};
pub use model::theme::{palette, theme_names, ThemePalette};
pub use utils::image_blank::{blank_image, ImageBlankError};
pub use vm::notify::{run_template_update, LogNotifier, Notifier};
