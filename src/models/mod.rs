pub mod content;
pub mod loaders;
pub mod question;
pub mod template;

pub use content::{ContentSet, Curriculum, Lesson, Subject};
pub use loaders::{embedded_content, load_content_file, load_content_folder, parse_content};
pub use question::{
    Difficulty, Essay, FillInBlank, MatchPair, Matching, MatchingPairs, MultipleChoice,
    MultipleChoiceType, Ordering, Question, QuestionData, QuestionType, ShortAnswer, TrueFalse,
};
pub use template::{
    ContentTemplates, CurriculumTemplate, LessonTemplate, QuestionTemplate, SubjectTemplate,
};
