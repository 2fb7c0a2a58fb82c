#![forbid(unsafe_code)]

pub mod model;
pub mod normalize;

pub use model::{AnswerRecord, AnswerStatus, Choice, OptionKey, Question, QuestionError, QuestionId};
pub use normalize::{IndexedRecord, KeyedRecord, MalformedQuestion, RawRecord, normalize};
