//! 内容树组装
//!
//! 把内容模板展开成带ID、带分支的实体树。组装本身是纯函数：
//! 不做 I/O，内容完全确定，只有ID来自注入的生成器。

use crate::models::{
    ContentSet, ContentTemplates, Curriculum, CurriculumTemplate, Lesson, LessonTemplate,
    Question, QuestionTemplate, Subject, SubjectTemplate,
};
use crate::services::id_generator::IdGenerator;
use crate::services::validator::{validate_content_set, ContentError};

/// 内容组装器
pub struct ContentAssembler<'a> {
    templates: &'a ContentTemplates,
    ids: &'a dyn IdGenerator,
}

impl<'a> ContentAssembler<'a> {
    pub fn new(templates: &'a ContentTemplates, ids: &'a dyn IdGenerator) -> Self {
        Self { templates, ids }
    }

    /// 为指定分支生成全部内容集
    ///
    /// 课时按 `order` 排序输出。
    pub fn assemble(&self, branch_id: &str) -> ContentSet {
        let mut content = ContentSet::new();
        for (key, template) in self.templates.iter() {
            content.insert(key, self.subject(template, branch_id));
        }
        content
    }

    /// 组装后校验整棵树，任何问题都会拒绝整批内容
    ///
    /// 违规记录带上已分配的实体ID，位置按排序后的课时计算。
    pub fn assemble_validated(&self, branch_id: &str) -> Result<ContentSet, ContentError> {
        let content = self.assemble(branch_id);
        validate_content_set(&content)?;
        Ok(content)
    }

    fn subject(&self, template: &SubjectTemplate, branch_id: &str) -> Subject {
        Subject {
            id: self.ids.next_id(),
            name: template.name.clone(),
            description: template.description.clone(),
            branch_id: branch_id.to_string(),
            curriculums: template
                .curriculums
                .iter()
                .map(|c| self.curriculum(c))
                .collect(),
        }
    }

    fn curriculum(&self, template: &CurriculumTemplate) -> Curriculum {
        let mut lessons: Vec<&LessonTemplate> = template.lessons.iter().collect();
        lessons.sort_by_key(|l| l.order);

        Curriculum {
            id: self.ids.next_id(),
            name: template.name.clone(),
            description: template.description.clone(),
            lessons: lessons.into_iter().map(|l| self.lesson(l)).collect(),
        }
    }

    fn lesson(&self, template: &LessonTemplate) -> Lesson {
        Lesson {
            id: self.ids.next_id(),
            name: template.name.clone(),
            description: template.description.clone(),
            order: template.order,
            questions: template.questions.iter().map(|q| self.question(q)).collect(),
        }
    }

    fn question(&self, template: &QuestionTemplate) -> Question {
        Question {
            id: self.ids.next_id(),
            difficulty: template.difficulty,
            question_text: template.question_text.clone(),
            data: template.data.clone(),
        }
    }
}
