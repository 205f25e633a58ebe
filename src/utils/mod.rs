//! 工具层：文件IO与图片处理

pub mod fs;
pub mod image_blank;
