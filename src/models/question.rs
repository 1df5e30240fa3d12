//! 题目数据模型
//!
//! `QuestionData` 是带标签的联合类型：题型由枚举变体决定，
//! 序列化时写成相邻的 `type` / `questionData` 两个字段。
//! 题型和数据结构不可能出现不一致。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// 选择题
    MultipleChoice,
    /// 判断题
    TrueFalse,
    /// 简答题
    ShortAnswer,
    /// 连线题
    Matching,
    /// 填空题
    FillInBlank,
    /// 排序题
    Ordering,
    /// 问答题（人工批改）
    Essay,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::ShortAnswer,
        QuestionType::Matching,
        QuestionType::FillInBlank,
        QuestionType::Ordering,
        QuestionType::Essay,
    ];

    /// 获取序列化使用的标签
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::TrueFalse => "TRUE_FALSE",
            QuestionType::ShortAnswer => "SHORT_ANSWER",
            QuestionType::Matching => "MATCHING",
            QuestionType::FillInBlank => "FILL_IN_BLANK",
            QuestionType::Ordering => "ORDERING",
            QuestionType::Essay => "ESSAY",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 选择题的作答方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultipleChoiceType {
    /// 单选
    SingleAnswer,
    /// 多选
    MultipleAnswer,
}

/// 选择题数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MultipleChoice {
    pub options: Vec<String>,
    /// 正确选项在 `options` 中的下标（从0开始）
    pub correct_answers: Vec<usize>,
    pub multiple_choice_type: MultipleChoiceType,
}

impl MultipleChoice {
    /// 把正确答案下标解析成选项文本，越界的下标被忽略
    pub fn correct_options(&self) -> Vec<&str> {
        self.correct_answers
            .iter()
            .filter_map(|&idx| self.options.get(idx).map(String::as_str))
            .collect()
    }
}

/// 判断题数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrueFalse {
    /// 只能包含一个 `"true"` 或 `"false"`
    pub correct_answers: Vec<String>,
}

impl TrueFalse {
    pub fn new(answer: bool) -> Self {
        Self {
            correct_answers: vec![answer.to_string()],
        }
    }

    /// 解析出布尔答案，数据不合法时返回 None
    pub fn answer(&self) -> Option<bool> {
        match self.correct_answers.as_slice() {
            [value] if value == "true" => Some(true),
            [value] if value == "false" => Some(false),
            _ => None,
        }
    }
}

/// 简答题数据
///
/// 答案为空表示开放式题目，不参与自动批改。大小写策略由批改方决定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShortAnswer {
    #[serde(default)]
    pub correct_answers: Vec<String>,
}

impl ShortAnswer {
    pub fn is_auto_graded(&self) -> bool {
        !self.correct_answers.is_empty()
    }
}

/// 连线题的左右两列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchingPairs {
    pub left_column: Vec<String>,
    pub right_column: Vec<String>,
}

/// 一条连线：左列下标 → 右列下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchPair {
    pub left: usize,
    pub right: usize,
}

/// 连线题数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Matching {
    pub pairs: MatchingPairs,
    pub correct_answers: Vec<MatchPair>,
}

impl Matching {
    /// 按左列顺序返回 (左, 右) 文本对
    pub fn resolved_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<MatchPair> = self.correct_answers.clone();
        pairs.sort_by_key(|p| p.left);
        pairs
            .iter()
            .filter_map(|p| {
                let left = self.pairs.left_column.get(p.left)?;
                let right = self.pairs.right_column.get(p.right)?;
                Some((left.as_str(), right.as_str()))
            })
            .collect()
    }
}

/// 填空题数据
///
/// `correct_answers` 是题干按空白切分后的词下标，多个下标表示可选的挖空位置。
/// 标点跟随所在的词，不单独成词。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FillInBlank {
    pub correct_answers: Vec<usize>,
}

impl FillInBlank {
    /// 题干分词规则：`str::split_whitespace`
    pub fn tokenize(question_text: &str) -> Vec<&str> {
        question_text.split_whitespace().collect()
    }

    /// 返回被挖空的词，越界下标被忽略
    pub fn blank_tokens<'a>(&self, question_text: &'a str) -> Vec<&'a str> {
        let tokens = Self::tokenize(question_text);
        self.correct_answers
            .iter()
            .filter_map(|&idx| tokens.get(idx).copied())
            .collect()
    }
}

/// 排序题数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ordering {
    pub options: Vec<String>,
    /// `options` 下标的一个排列，表示正确顺序
    pub correct_answers: Vec<usize>,
}

impl Ordering {
    pub fn ordered_options(&self) -> Vec<&str> {
        self.correct_answers
            .iter()
            .filter_map(|&idx| self.options.get(idx).map(String::as_str))
            .collect()
    }
}

/// 问答题数据，永远没有标准答案
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Essay {
    #[serde(default)]
    pub correct_answers: Vec<String>,
}

/// 按题型区分的题目数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "questionData",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum QuestionData {
    MultipleChoice(MultipleChoice),
    TrueFalse(TrueFalse),
    ShortAnswer(ShortAnswer),
    Matching(Matching),
    FillInBlank(FillInBlank),
    Ordering(Ordering),
    Essay(Essay),
}

impl QuestionData {
    pub fn kind(&self) -> QuestionType {
        match self {
            QuestionData::MultipleChoice(_) => QuestionType::MultipleChoice,
            QuestionData::TrueFalse(_) => QuestionType::TrueFalse,
            QuestionData::ShortAnswer(_) => QuestionType::ShortAnswer,
            QuestionData::Matching(_) => QuestionType::Matching,
            QuestionData::FillInBlank(_) => QuestionType::FillInBlank,
            QuestionData::Ordering(_) => QuestionType::Ordering,
            QuestionData::Essay(_) => QuestionType::Essay,
        }
    }

    /// 是否可以自动批改：问答题和没有标准答案的简答题需要人工批改
    pub fn is_auto_graded(&self) -> bool {
        match self {
            QuestionData::ShortAnswer(sa) => sa.is_auto_graded(),
            QuestionData::Essay(_) => false,
            _ => true,
        }
    }
}

/// 种子数据中的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub difficulty: Difficulty,
    pub question_text: String,
    #[serde(flatten)]
    pub data: QuestionData,
}

impl Question {
    pub fn kind(&self) -> QuestionType {
        self.data.kind()
    }
}
