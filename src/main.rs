use anyhow::{Context, Result};
use std::path::PathBuf;
use vocab_merge::{logging, App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置：第一个参数为配置文件路径（可省略）
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("加载配置失败")?;

    App::new(config).run()?;

    Ok(())
}
