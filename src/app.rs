use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{embedded_content, load_content_folder, ContentSet, ContentTemplates};
use crate::services::id_generator::IdGenerator;
use crate::services::stats::ContentStats;
use crate::services::validator::ContentError;
use crate::utils::logging::{
    append_report, init_report_file, log_content_loaded, log_startup, print_final_stats,
    truncate_text,
};
use crate::workflow::ContentAssembler;
use tokio::fs;
use tracing::{debug, error, info};

/// 应用主结构
pub struct App {
    config: Config,
    ids: Box<dyn IdGenerator>,
}

/// 一次运行的结果
#[derive(Debug)]
pub struct RunSummary {
    pub content: ContentSet,
    pub stats: ContentStats,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        init_report_file(&config.report_file)?;

        let source = config.content_folder.as_deref().unwrap_or("内置内容");
        log_startup(&config.branch_id, source);

        let ids = config.id_generator();
        Ok(Self { config, ids })
    }

    /// 运行应用主逻辑：加载 → 校验 → 组装 → 导出
    pub async fn run(&self) -> AppResult<RunSummary> {
        let templates = load_templates(&self.config).await?;
        log_content_loaded(templates.len(), templates.question_count());

        let content = ContentAssembler::new(&templates, self.ids.as_ref())
            .assemble_validated(&self.config.branch_id)
            .map_err(|e| self.reject(e))?;

        for (key, question) in content.iter_questions() {
            debug!(
                "[{}] {} {} | {}",
                key,
                question.kind(),
                question.id,
                truncate_text(&question.question_text, 40)
            );
        }

        write_output(&content, &self.config.output_file).await?;

        let stats = ContentStats::collect(&content);
        append_report(&self.config.report_file, &stats.to_string())?;
        print_final_stats(&stats, &self.config.output_file, &self.config.report_file);

        Ok(RunSummary { content, stats })
    }

    /// 记录校验失败，整批内容被拒绝
    fn reject(&self, err: ContentError) -> AppError {
        error!("❌ 内容校验失败，共 {} 处问题", err.violations().len());
        for violation in err.violations() {
            error!("  - {}", violation);
        }
        if let Err(e) = append_report(&self.config.report_file, &err.to_string()) {
            error!("写入报告失败: {}", e);
        }
        AppError::Content(err)
    }
}

/// 加载内容模板：配置了目录则读目录，否则使用内置内容
async fn load_templates(config: &Config) -> AppResult<ContentTemplates> {
    match &config.content_folder {
        Some(folder) => {
            info!("\n📁 正在扫描内容目录 {} ...", folder);
            load_content_folder(folder).await
        }
        None => {
            info!("\n📦 使用内置内容");
            embedded_content()
        }
    }
}

/// 导出 JSON，交给持久层
async fn write_output(content: &ContentSet, output_path: &str) -> AppResult<()> {
    let json = serde_json::to_string_pretty(content)?;
    fs::write(output_path, json)
        .await
        .map_err(|e| AppError::file_write_failed(output_path, e))?;
    info!("✓ 已导出 {} 个科目到 {}", content.len(), output_path);
    Ok(())
}
