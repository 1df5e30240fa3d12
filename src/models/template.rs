//! 内容模板
//!
//! 与 `content` 中的实体一一对应，但不带 ID 和分支，
//! 由 TOML 内容文件直接反序列化得到。

use crate::models::question::{Difficulty, QuestionData};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubjectTemplate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub curriculums: Vec<CurriculumTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CurriculumTemplate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<LessonTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LessonTemplate {
    pub name: String,
    pub description: String,
    pub order: u32,
    #[serde(default)]
    pub questions: Vec<QuestionTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTemplate {
    pub difficulty: Difficulty,
    pub question_text: String,
    #[serde(flatten)]
    pub data: QuestionData,
}

/// 全部内容模板，按内容集键排序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTemplates {
    sets: BTreeMap<String, SubjectTemplate>,
}

impl ContentTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个内容集，键已存在时返回旧值
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        template: SubjectTemplate,
    ) -> Option<SubjectTemplate> {
        self.sets.insert(key.into(), template)
    }

    pub fn get(&self, key: &str) -> Option<&SubjectTemplate> {
        self.sets.get(key)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubjectTemplate)> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn question_count(&self) -> usize {
        self.sets
            .values()
            .flat_map(|s| s.curriculums.iter())
            .flat_map(|c| c.lessons.iter())
            .map(|l| l.questions.len())
            .sum()
    }
}

/// 内容集键必须是小写 ASCII 标识符：`[a-z][a-z0-9_]*`
pub fn is_valid_content_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
