//! 图片清空：将PNG覆写为同尺寸的全透明版本

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageBlankError {
    #[error("图片处理失败: {0}")]
    Image(#[from] image::ImageError),
}

/// 将 `path` 处的PNG覆写为同尺寸的全透明图片
///
/// 先只读取图片尺寸再整体覆写；读取失败时不写入任何内容。
pub fn blank_image(path: &Path) -> Result<(), ImageBlankError> {
    let (width, height) = image::image_dimensions(path)?;

    let blank = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    blank.save(path)?;

    tracing::info!("已将 {} 覆写为 {}x{} 的空白PNG", path.display(), width, height);
    Ok(())
}
