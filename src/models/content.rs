//! 内容树：科目 → 课程 → 课时 → 题目
//!
//! 这些结构只在生成时创建一次，之后交给持久层，不再修改。

use crate::models::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 科目（例如一门语言）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 所属分支（租户 / 机构）
    pub branch_id: String,
    pub curriculums: Vec<Curriculum>,
}

impl Subject {
    pub fn lesson_count(&self) -> usize {
        self.curriculums.iter().map(|c| c.lessons.len()).sum()
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    /// 按顺序遍历该科目下的全部题目
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.curriculums
            .iter()
            .flat_map(|c| c.lessons.iter())
            .flat_map(|l| l.questions.iter())
    }
}

/// 课程（某个级别或方向）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

/// 课时
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 在课程中的显示顺序，没有题目的课时也需要固定位置
    pub order: u32,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 生成结果：内容集键（如 "english"）→ 科目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentSet {
    subjects: BTreeMap<String, Subject>,
}

impl ContentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, subject: Subject) -> Option<Subject> {
        self.subjects.insert(key.into(), subject)
    }

    pub fn get(&self, key: &str) -> Option<&Subject> {
        self.subjects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Subject> {
        self.subjects.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Subject)> {
        self.subjects.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Subject)> {
        self.subjects.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// 遍历全部题目，附带所属内容集键
    pub fn iter_questions(&self) -> impl Iterator<Item = (&str, &Question)> {
        self.iter()
            .flat_map(|(key, subject)| subject.questions().map(move |q| (key, q)))
    }

    pub fn question_count(&self) -> usize {
        self.subjects.values().map(Subject::question_count).sum()
    }
}
