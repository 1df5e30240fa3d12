use anyhow::{Context, Result};
use curriculum_seed::utils::logging;
use curriculum_seed::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    app.run().await.context("种子内容生成失败")?;

    Ok(())
}
