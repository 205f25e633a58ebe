//! 主题配色表：桌面界面可用的静态配色方案

use serde::Serialize;
use serde_json::Value;

/// 单个主题的界面配色（十六进制颜色值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    /// 窗口背景色
    pub bg: &'static str,
    /// 前景文字色
    pub fg: &'static str,
    /// 输入框背景色
    pub entry_bg: &'static str,
    /// 输入框文字色
    pub entry_fg: &'static str,
    /// 按钮背景色
    pub btn_bg: &'static str,
}

/// 全部主题，按界面展示顺序排列
pub const THEMES: &[(&str, ThemePalette)] = &[
    (
        "Light",
        ThemePalette {
            bg: "#f0f0f0",
            fg: "#000000",
            entry_bg: "#ffffff",
            entry_fg: "#000000",
            btn_bg: "#E7E7E7",
        },
    ),
    (
        "Dark",
        ThemePalette {
            bg: "#242424",
            fg: "#ffffff",
            entry_bg: "#525252",
            entry_fg: "#ffffff",
            btn_bg: "#3c3c3c",
        },
    ),
    (
        "High Contrast",
        ThemePalette {
            bg: "#000000",
            fg: "#00FF00",
            entry_bg: "#001F09",
            entry_fg: "#00FF00",
            btn_bg: "#001105",
        },
    ),
    (
        "Forest",
        ThemePalette {
            bg: "#132a13",
            fg: "#ecf39e",
            entry_bg: "#3D6D37",
            entry_fg: "#ecf39e",
            btn_bg: "#31572c",
        },
    ),
    (
        "Ocean",
        ThemePalette {
            bg: "#0d1b2a",
            fg: "#e0e1dd",
            entry_bg: "#4A6787",
            entry_fg: "#e0e1dd",
            btn_bg: "#415a77",
        },
    ),
    (
        "Mountain",
        ThemePalette {
            bg: "#232220",
            fg: "#ffddba",
            entry_bg: "#6B6666",
            entry_fg: "#ffddba",
            btn_bg: "#4f4c4c",
        },
    ),
    (
        "Sunrise",
        ThemePalette {
            bg: "#F5E9D3",
            fg: "#6B4226",
            entry_bg: "#FAF5EA",
            entry_fg: "#6B4226",
            btn_bg: "#ECDFCA",
        },
    ),
    (
        "Sunset",
        ThemePalette {
            bg: "#2F2C3D",
            fg: "#B5BCFF",
            entry_bg: "#5D5879",
            entry_fg: "#B5BCFF",
            btn_bg: "#49455F",
        },
    ),
    (
        "Midnight",
        ThemePalette {
            bg: "#09141F",
            fg: "#ECE6C5",
            entry_bg: "#0F2133",
            entry_fg: "#ECE6C5",
            btn_bg: "#0C1A29",
        },
    ),
    (
        "Wine",
        ThemePalette {
            bg: "#251920",
            fg: "#f7ebed",
            entry_bg: "#532333",
            entry_fg: "#f7ebed",
            btn_bg: "#3e1a26",
        },
    ),
];

/// 按名称查找主题配色
pub fn palette(name: &str) -> Option<&'static ThemePalette> {
    THEMES.iter().find(|(n, _)| *n == name).map(|(_, p)| p)
}

/// 主题名称列表（展示顺序）
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|(n, _)| *n).collect()
}

/// 将全部主题序列化为JSON对象（名称 → 配色），供界面层消费
pub fn themes_as_json() -> Result<Value, serde_json::Error> {
    let mut map = serde_json::Map::new();
    for (name, palette) in THEMES {
        map.insert((*name).to_string(), serde_json::to_value(palette)?);
    }
    Ok(Value::Object(map))
}
