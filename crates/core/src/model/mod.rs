mod answer;
mod ids;
mod question;

pub use answer::{AnswerRecord, AnswerStatus};
pub use ids::{OptionKey, ParseIdError, QuestionId};
pub use question::{Choice, Question, QuestionError};
