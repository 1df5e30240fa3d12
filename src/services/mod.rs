pub mod id_generator;
pub mod stats;
pub mod validator;

pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use stats::{ContentStats, SubjectStats};
pub use validator::{
    validate_content_set, validate_question, validate_question_data, ContentError,
    ContentViolation, ValidationError, ViolationKind,
};
