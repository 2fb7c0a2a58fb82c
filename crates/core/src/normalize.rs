//! Conversion of raw repository records into canonical [`Question`]s.
//!
//! Two source encodings exist in the wild and both are supported behind one
//! tagged-variant input: one keys its options and names the correct answer as
//! a 1-based ordinal string, the other lists option texts and carries a
//! zero-based correct index. Records that fail to resolve to exactly one
//! correct option are rejected per record, not per file.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

use crate::model::{Choice, OptionKey, Question, QuestionError, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Per-record normalization failure.
///
/// A malformed record is excluded from the playable set; the rest of the load
/// proceeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedQuestion {
    #[error("answer indicator {given:?} is not a 1-based ordinal")]
    UnparsableOrdinal { given: String },

    #[error("answer ordinal {ordinal} does not name one of {option_count} options")]
    OrdinalOutOfRange { ordinal: usize, option_count: usize },

    #[error("answer index {index} does not name one of {option_count} options")]
    AnswerIndexOutOfRange { index: usize, option_count: usize },

    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

//
// ─── RAW RECORDS ───────────────────────────────────────────────────────────────
//

/// One record as it appears in the question data file, in either encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    Keyed(KeyedRecord),
    Indexed(IndexedRecord),
}

/// Encoding with keyed options and a 1-based ordinal answer string:
/// `{ number, question, options: {key → text}, answer: "2" }`.
///
/// The ordinal indexes the option *position* list, so `options` is
/// deserialized in document order rather than through an unordered map.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyedRecord {
    #[serde(default)]
    pub number: Option<u32>,
    pub question: String,
    #[serde(deserialize_with = "options_in_document_order")]
    pub options: Vec<(String, String)>,
    pub answer: String,
}

/// Encoding with listed options and a zero-based correct index:
/// `{ question, options: [text, …], correctAnswer: 0 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

fn options_in_document_order<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedOptions;

    impl<'de> Visitor<'de> for OrderedOptions {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of option key to option text")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedOptions)
}

//
// ─── NORMALIZATION ─────────────────────────────────────────────────────────────
//

/// Normalizes one raw record into a canonical [`Question`].
///
/// `position` is the record's zero-based position in the data file; it
/// supplies the 1-based ordinal when the record carries none, and key
/// assignment ("A", "B", …) for sources without keys.
///
/// # Errors
///
/// Returns `MalformedQuestion` when the answer indicator does not resolve to
/// exactly one option, or the resulting question violates the canonical-model
/// invariants.
pub fn normalize(position: usize, record: RawRecord) -> Result<Question, MalformedQuestion> {
    match record {
        RawRecord::Keyed(keyed) => normalize_keyed(position, keyed),
        RawRecord::Indexed(indexed) => normalize_indexed(position, indexed),
    }
}

fn ordinal_for(position: usize) -> QuestionId {
    let ordinal = u32::try_from(position).unwrap_or(u32::MAX - 1).saturating_add(1);
    QuestionId::new(ordinal)
}

fn normalize_keyed(position: usize, record: KeyedRecord) -> Result<Question, MalformedQuestion> {
    let ordinal: usize = record.answer.trim().parse().map_err(|_| {
        MalformedQuestion::UnparsableOrdinal {
            given: record.answer.clone(),
        }
    })?;
    if ordinal == 0 || ordinal > record.options.len() {
        return Err(MalformedQuestion::OrdinalOutOfRange {
            ordinal,
            option_count: record.options.len(),
        });
    }

    let id = record.number.map_or_else(|| ordinal_for(position), QuestionId::new);
    let choices = record
        .options
        .iter()
        .enumerate()
        .map(|(i, (key, text))| {
            let key = OptionKey::new(key);
            let text = strip_label_artifact(text, &key);
            Choice::new(key, text, i == ordinal - 1)
        })
        .collect();

    Ok(Question::new(id, record.question.trim(), choices)?)
}

fn normalize_indexed(position: usize, record: IndexedRecord) -> Result<Question, MalformedQuestion> {
    if record.correct_answer >= record.options.len() {
        return Err(MalformedQuestion::AnswerIndexOutOfRange {
            index: record.correct_answer,
            option_count: record.options.len(),
        });
    }

    let choices = record
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let key = OptionKey::from_position(i);
            let text = strip_label_artifact(text, &key);
            Choice::new(key, text, i == record.correct_answer)
        })
        .collect();

    Ok(Question::new(
        ordinal_for(position),
        record.question.trim(),
        choices,
    )?)
}

/// Strips a leading enumeration artifact from option display text.
///
/// Handles a leading label token matching the option's own key ("A. Paris")
/// and a stray separator left behind by the authoring tool (". Paris").
fn strip_label_artifact(text: &str, key: &OptionKey) -> String {
    let mut rest = text.trim_start();

    let labeled = rest
        .get(..key.as_str().len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(key.as_str()));
    if labeled {
        let after = &rest[key.as_str().len()..];
        if let Some(sep) = after.chars().next().filter(|c| is_label_separator(*c)) {
            rest = after[sep.len_utf8()..].trim_start();
        }
    } else if let Some(sep) = rest.chars().next().filter(|c| is_label_separator(*c)) {
        rest = rest[sep.len_utf8()..].trim_start();
    }

    rest.trim_end().to_string()
}

fn is_label_separator(c: char) -> bool {
    matches!(c, '.' | ')' | ':' | '、' | '·')
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
