//! 数据模型层：路径重写、模板流水线与主题配色

pub mod path_rewrite;
pub mod template;
pub mod theme;
