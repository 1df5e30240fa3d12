//! 内容统计

use crate::models::{ContentSet, Difficulty, QuestionType};
use std::collections::BTreeMap;
use std::fmt;

/// 单个科目的数量统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectStats {
    pub curriculums: usize,
    pub lessons: usize,
    pub questions: usize,
}

/// 整个内容集的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStats {
    pub per_subject: BTreeMap<String, SubjectStats>,
    pub per_type: BTreeMap<QuestionType, usize>,
    pub per_difficulty: BTreeMap<Difficulty, usize>,
    pub total_questions: usize,
    /// 需要人工批改的题目数
    pub open_ended: usize,
}

impl ContentStats {
    pub fn collect(content: &ContentSet) -> Self {
        let mut stats = Self::default();

        for (key, subject) in content.iter() {
            stats.per_subject.insert(
                key.to_string(),
                SubjectStats {
                    curriculums: subject.curriculums.len(),
                    lessons: subject.lesson_count(),
                    questions: subject.question_count(),
                },
            );
        }

        for (_, question) in content.iter_questions() {
            *stats.per_type.entry(question.kind()).or_default() += 1;
            *stats.per_difficulty.entry(question.difficulty).or_default() += 1;
            stats.total_questions += 1;
            if !question.data.is_auto_graded() {
                stats.open_ended += 1;
            }
        }

        stats
    }

    pub fn count_of(&self, kind: QuestionType) -> usize {
        self.per_type.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for ContentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "题目总数: {}", self.total_questions)?;
        writeln!(f, "人工批改: {}", self.open_ended)?;
        for (key, s) in &self.per_subject {
            writeln!(
                f,
                "  {}: 课程 {} | 课时 {} | 题目 {}",
                key, s.curriculums, s.lessons, s.questions
            )?;
        }
        writeln!(f, "按题型:")?;
        for kind in QuestionType::ALL {
            writeln!(f, "  {}: {}", kind, self.count_of(kind))?;
        }
        writeln!(f, "按难度:")?;
        for (difficulty, count) in &self.per_difficulty {
            writeln!(f, "  {}: {}", difficulty, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Curriculum, Essay, Lesson, Question, QuestionData, ShortAnswer, Subject, TrueFalse,
    };

    fn question(id: &str, difficulty: Difficulty, data: QuestionData) -> Question {
        Question {
            id: id.to_string(),
            difficulty,
            question_text: "prompt".to_string(),
            data,
        }
    }

    #[test]
    fn test_collect_counts_types_and_open_ended() {
        let mut content = ContentSet::new();
        content.insert(
            "english",
            Subject {
                id: "s".into(),
                name: "English".into(),
                description: String::new(),
                branch_id: "b".into(),
                curriculums: vec![Curriculum {
                    id: "c".into(),
                    name: "A1".into(),
                    description: String::new(),
                    lessons: vec![Lesson {
                        id: "l".into(),
                        name: "Hobbies".into(),
                        description: String::new(),
                        order: 1,
                        questions: vec![
                            question(
                                "q1",
                                Difficulty::Easy,
                                QuestionData::ShortAnswer(ShortAnswer {
                                    correct_answers: vec![],
                                }),
                            ),
                            question(
                                "q2",
                                Difficulty::Easy,
                                QuestionData::ShortAnswer(ShortAnswer {
                                    correct_answers: vec!["reading".into()],
                                }),
                            ),
                            question("q3", Difficulty::Hard, QuestionData::Essay(Essay::default())),
                            question(
                                "q4",
                                Difficulty::Medium,
                                QuestionData::TrueFalse(TrueFalse::new(true)),
                            ),
                        ],
                    }],
                }],
            },
        );

        let stats = ContentStats::collect(&content);

        assert_eq!(stats.total_questions, 4);
        assert_eq!(stats.open_ended, 2);
        assert_eq!(stats.count_of(QuestionType::ShortAnswer), 2);
        assert_eq!(stats.count_of(QuestionType::Matching), 0);
        assert_eq!(stats.per_difficulty.get(&Difficulty::Easy), Some(&2));
        assert_eq!(
            stats.per_subject.get("english"),
            Some(&SubjectStats {
                curriculums: 1,
                lessons: 1,
                questions: 4
            })
        );
        assert!(stats.to_string().contains("人工批改: 2"));
    }
}
