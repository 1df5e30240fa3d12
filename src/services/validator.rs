//! 内容校验服务
//!
//! 题目级规则在 `validate_question_data` 中，按题型逐条检查。
//! 批量校验会收集整批内容中的全部问题，只要有一处不合法就拒绝整批，
//! 错误信息中带上出问题的实体ID和位置，方便回到内容文件中修改。

use crate::models::{
    ContentSet, FillInBlank, Matching, MultipleChoice, MultipleChoiceType, Ordering, Question,
    QuestionData, TrueFalse,
};
use crate::models::template::is_valid_content_key;
use std::collections::HashSet;
use std::fmt;

/// 单道题目违反的约束
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("题干不能为空")]
    EmptyQuestionText,

    #[error("{field} 至少需要 {min} 项，实际 {actual} 项")]
    TooFewItems {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} 中的索引 {index} 超出范围 [0, {len})")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{field} 中的索引 {index} 重复出现")]
    DuplicateIndex { field: &'static str, index: usize },

    #[error("选项 \"{option}\" 重复出现")]
    DuplicateOption { option: String },

    #[error("单选题必须恰好有 1 个正确答案，实际 {count} 个")]
    SingleAnswerCount { count: usize },

    #[error("判断题必须恰好有 1 个答案，实际 {count} 个")]
    TrueFalseCount { count: usize },

    #[error("判断题答案只能是 \"true\" 或 \"false\"，实际为 \"{value}\"")]
    TrueFalseLiteral { value: String },

    #[error("连线题左右两列长度不一致: 左列 {left} 项，右列 {right} 项")]
    ColumnLengthMismatch { left: usize, right: usize },

    #[error("连线题左列索引 {index} 没有对应的答案")]
    UnmappedLeft { index: usize },

    #[error("排序题答案不是 [0, {len}) 的完整排列，缺少索引 {missing:?}")]
    IncompletePermutation { len: usize, missing: Vec<usize> },

    #[error("问答题不应包含标准答案，实际 {count} 个")]
    EssayHasAnswers { count: usize },
}

/// 校验一道题的数据
///
/// # 参数
/// - `data`: 题目数据，题型由变体决定
/// - `question_text`: 题干，填空题按它分词
///
/// # 返回
/// 返回第一个被违反的约束
pub fn validate_question_data(
    data: &QuestionData,
    question_text: &str,
) -> Result<(), ValidationError> {
    match data {
        QuestionData::MultipleChoice(mc) => check_multiple_choice(mc),
        QuestionData::TrueFalse(tf) => check_true_false(tf),
        QuestionData::ShortAnswer(_) => Ok(()),
        QuestionData::Matching(m) => check_matching(m),
        QuestionData::FillInBlank(fib) => check_fill_in_blank(fib, question_text),
        QuestionData::Ordering(o) => check_ordering(o),
        QuestionData::Essay(essay) => {
            if essay.correct_answers.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::EssayHasAnswers {
                    count: essay.correct_answers.len(),
                })
            }
        }
    }
}

pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.question_text.trim().is_empty() {
        return Err(ValidationError::EmptyQuestionText);
    }
    validate_question_data(&question.data, &question.question_text)
}

fn check_min_items(field: &'static str, min: usize, actual: usize) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::TooFewItems { field, min, actual });
    }
    Ok(())
}

/// 下标必须在 [0, len) 内且互不重复
fn check_unique_in_range(
    field: &'static str,
    indices: &[usize],
    len: usize,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(indices.len());
    for &index in indices {
        if index >= len {
            return Err(ValidationError::IndexOutOfRange { field, index, len });
        }
        if !seen.insert(index) {
            return Err(ValidationError::DuplicateIndex { field, index });
        }
    }
    Ok(())
}

fn check_multiple_choice(mc: &MultipleChoice) -> Result<(), ValidationError> {
    check_min_items("options", 2, mc.options.len())?;

    let mut seen = HashSet::with_capacity(mc.options.len());
    for option in &mc.options {
        if !seen.insert(option.as_str()) {
            return Err(ValidationError::DuplicateOption {
                option: option.clone(),
            });
        }
    }

    check_unique_in_range("correctAnswers", &mc.correct_answers, mc.options.len())?;

    if mc.multiple_choice_type == MultipleChoiceType::SingleAnswer
        && mc.correct_answers.len() != 1
    {
        return Err(ValidationError::SingleAnswerCount {
            count: mc.correct_answers.len(),
        });
    }
    Ok(())
}

fn check_true_false(tf: &TrueFalse) -> Result<(), ValidationError> {
    match tf.correct_answers.as_slice() {
        [value] if value == "true" || value == "false" => Ok(()),
        [value] => Err(ValidationError::TrueFalseLiteral {
            value: value.clone(),
        }),
        answers => Err(ValidationError::TrueFalseCount {
            count: answers.len(),
        }),
    }
}

fn check_matching(m: &Matching) -> Result<(), ValidationError> {
    let left_len = m.pairs.left_column.len();
    let right_len = m.pairs.right_column.len();
    if left_len != right_len {
        return Err(ValidationError::ColumnLengthMismatch {
            left: left_len,
            right: right_len,
        });
    }
    check_min_items("pairs.leftColumn", 1, left_len)?;

    let lefts: Vec<usize> = m.correct_answers.iter().map(|p| p.left).collect();
    let rights: Vec<usize> = m.correct_answers.iter().map(|p| p.right).collect();
    check_unique_in_range("correctAnswers.left", &lefts, left_len)?;
    check_unique_in_range("correctAnswers.right", &rights, right_len)?;

    // 左列下标互不重复且都在范围内，数量不足说明有左列没被映射
    if let Some(index) = (0..left_len).find(|i| !lefts.contains(i)) {
        return Err(ValidationError::UnmappedLeft { index });
    }
    Ok(())
}

fn check_fill_in_blank(fib: &FillInBlank, question_text: &str) -> Result<(), ValidationError> {
    let token_count = FillInBlank::tokenize(question_text).len();
    check_min_items("correctAnswers", 1, fib.correct_answers.len())?;
    check_unique_in_range("correctAnswers", &fib.correct_answers, token_count)
}

fn check_ordering(o: &Ordering) -> Result<(), ValidationError> {
    let len = o.options.len();
    check_min_items("options", 2, len)?;
    check_unique_in_range("correctAnswers", &o.correct_answers, len)?;

    if o.correct_answers.len() != len {
        let missing = (0..len)
            .filter(|i| !o.correct_answers.contains(i))
            .collect();
        return Err(ValidationError::IncompletePermutation { len, missing });
    }
    Ok(())
}

// ========== 批量校验 ==========

/// 内容树中的一处问题
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    #[error(transparent)]
    Question(#[from] ValidationError),

    #[error("ID 不能为空")]
    EmptyId,

    #[error("ID 重复: {id}")]
    DuplicateId { id: String },

    #[error("课时顺序 {order} 在同一课程中重复")]
    DuplicateLessonOrder { order: u32 },

    #[error("{field} 不能为空")]
    EmptyField { field: &'static str },

    #[error("内容集键不合法: {key}")]
    InvalidContentKey { key: String },
}

/// 带位置信息的问题记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentViolation {
    /// 出问题的实体ID，ID为空或内容集键不合法时没有
    pub entity_id: Option<String>,
    /// 例如 `english/curriculums[0]/lessons[2]/questions[1]`
    pub location: String,
    pub kind: ViolationKind,
}

impl fmt::Display for ContentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity_id {
            Some(id) => write!(f, "[{}] id={}: {}", self.location, id, self.kind),
            None => write!(f, "[{}]: {}", self.location, self.kind),
        }
    }
}

/// 整批内容被拒绝
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("内容校验失败，共 {} 处问题:\n{}", .0.len(), render_violations(.0))]
    Rejected(Vec<ContentViolation>),
}

impl ContentError {
    pub fn violations(&self) -> &[ContentViolation] {
        match self {
            ContentError::Rejected(violations) => violations,
        }
    }
}

fn render_violations(violations: &[ContentViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Default)]
struct Collector {
    violations: Vec<ContentViolation>,
    seen_ids: HashSet<String>,
}

impl Collector {
    fn push(&mut self, entity_id: Option<&str>, location: &str, kind: ViolationKind) {
        self.violations.push(ContentViolation {
            entity_id: entity_id.map(str::to_string),
            location: location.to_string(),
            kind,
        });
    }

    fn check_id(&mut self, id: &str, location: &str) {
        if id.trim().is_empty() {
            self.push(None, location, ViolationKind::EmptyId);
        } else if !self.seen_ids.insert(id.to_string()) {
            self.push(
                Some(id),
                location,
                ViolationKind::DuplicateId { id: id.to_string() },
            );
        }
    }

    fn check_field(&mut self, id: &str, location: &str, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(Some(id), location, ViolationKind::EmptyField { field });
        }
    }

    fn check_key(&mut self, key: &str) {
        if !is_valid_content_key(key) {
            self.push(
                None,
                key,
                ViolationKind::InvalidContentKey {
                    key: key.to_string(),
                },
            );
        }
    }

    fn check_lesson_order(
        &mut self,
        seen_orders: &mut HashSet<u32>,
        order: u32,
        id: &str,
        location: &str,
    ) {
        if !seen_orders.insert(order) {
            self.push(Some(id), location, ViolationKind::DuplicateLessonOrder { order });
        }
    }

    fn check_question(&mut self, question: &Question, location: &str) {
        if let Err(e) = validate_question(question) {
            self.push(Some(question.id.as_str()), location, ViolationKind::Question(e));
        }
    }

    fn finish(self) -> Result<(), ContentError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Rejected(self.violations))
        }
    }
}

/// 校验生成后的内容树：题目约束 + 全树ID唯一 + 课时顺序唯一
pub fn validate_content_set(content: &ContentSet) -> Result<(), ContentError> {
    let mut collector = Collector::default();

    for (key, subject) in content.iter() {
        collector.check_key(key);
        collector.check_id(&subject.id, key);
        collector.check_field(&subject.id, key, "name", &subject.name);
        collector.check_field(&subject.id, key, "branchId", &subject.branch_id);

        for (ci, curriculum) in subject.curriculums.iter().enumerate() {
            let c_loc = format!("{}/curriculums[{}]", key, ci);
            collector.check_id(&curriculum.id, &c_loc);
            collector.check_field(&curriculum.id, &c_loc, "name", &curriculum.name);

            let mut orders = HashSet::new();
            for (li, lesson) in curriculum.lessons.iter().enumerate() {
                let l_loc = format!("{}/lessons[{}]", c_loc, li);
                collector.check_id(&lesson.id, &l_loc);
                collector.check_field(&lesson.id, &l_loc, "name", &lesson.name);
                collector.check_lesson_order(&mut orders, lesson.order, &lesson.id, &l_loc);

                for (qi, question) in lesson.questions.iter().enumerate() {
                    let q_loc = format!("{}/questions[{}]", l_loc, qi);
                    collector.check_id(&question.id, &q_loc);
                    collector.check_question(question, &q_loc);
                }
            }
        }
    }

    collector.finish()
}
