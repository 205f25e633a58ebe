//! 程序入口：初始化日志，按参数分发模板生成、图片清空与主题导出

use std::path::Path;

use tracing_subscriber::fmt::SubscriberBuilder;

use muban_gongju::model::theme;
use muban_gongju::utils::image_blank::blank_image;
use muban_gongju::vm::notify::{run_template_update, LogNotifier};

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        // blank <文件>... ：逐个清空PNG图片
        Some("blank") => {
            for p in args {
                blank_image(Path::new(&p))?;
            }
        }
        // themes ：将主题配色表输出到stdout
        Some("themes") => {
            let themes = theme::themes_as_json()?;
            println!("{}", serde_json::to_string_pretty(&themes)?);
        }
        // 默认：在当前目录生成模板
        None => {
            let cwd = std::env::current_dir()?;
            run_template_update(&cwd, &LogNotifier)?;
        }
        Some(other) => anyhow::bail!("未知命令: {}", other),
    }

    Ok(())
}
