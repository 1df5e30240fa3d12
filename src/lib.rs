//! # Curriculum Seed
//!
//! 为语言学习应用生成数据库种子内容：科目 → 课程 → 课时 → 题目
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/question` - 题目与按题型区分的题目数据（带标签的枚举）
//! - `models/content` - 带ID的内容树，交给持久层
//! - `models/template` - 不带ID的内容模板，对应 `content/*.toml`
//! - `models/loaders` - 内置内容与目录内容的加载
//!
//! ### ② 业务能力层（Services）
//! - `validator` - 题型约束校验，批量拒绝
//! - `id_generator` - 可注入的ID生成能力
//! - `stats` - 内容统计
//!
//! ### ③ 流程层（Workflow）
//! - `ContentAssembler` - 模板 + 分支ID → 内容树
//!
//! ### ④ 应用层
//! - `App` - 加载 → 校验 → 组装 → 导出 JSON

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunSummary};
pub use config::{Config, IdStrategy};
pub use error::{AppError, AppResult};
pub use models::{ContentSet, Question, QuestionData, QuestionType, Subject};
pub use services::{ContentError, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use workflow::ContentAssembler;

/// 使用内置内容为指定分支生成并校验全部种子内容
///
/// # 参数
/// - `branch_id`: 内容所属分支
/// - `ids`: ID 生成器
pub fn generate_seed_content(branch_id: &str, ids: &dyn IdGenerator) -> AppResult<ContentSet> {
    let templates = models::embedded_content()?;
    let content = ContentAssembler::new(&templates, ids).assemble_validated(branch_id)?;
    Ok(content)
}
