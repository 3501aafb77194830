//! Contract wire types.
//!
//! DESIGN
//! ======
//! Field names mirror the deployed contract's JSON exactly (snake_case), so
//! results decode without renames. `created_time` values are block
//! timestamps in nanoseconds.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A question as stored by the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub title: String,
    pub content: String,
    pub total_vote: i32,
    pub total_answer: i32,
    pub created_time: i64,
    pub creator_id: String,
}

/// An answer attached to a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer_id: String,
    pub question_id: String,
    pub content: String,
    pub total_vote: i32,
    pub total_amount_donate: i64,
    pub created_time: i64,
    pub creator_id: String,
}

/// One donation made to an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonateInfo {
    pub donate_info_id: String,
    pub answer_id: String,
    pub donate_creator_id: String,
    pub created_time: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("content must not be empty")]
    EmptyContent,
    #[error("invalid donation amount: {0}")]
    InvalidAmount(String),
}

/// Payload for `create_question`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCreateDto {
    pub title: String,
    pub content: String,
}

impl QuestionCreateDto {
    /// Build a payload from form input, trimming both fields.
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(Self { title: title.to_owned(), content: content.to_owned() })
    }
}

/// Payload for `create_answer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCreateDto {
    pub question_id: String,
    pub content: String,
}

impl AnswerCreateDto {
    pub fn new(question_id: &str, content: &str) -> Result<Self, ValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(Self { question_id: question_id.to_owned(), content: content.to_owned() })
    }
}

/// Largest amount the SDK can pass as an exact JS number (2^53 - 1).
pub const MAX_DONATION_AMOUNT: i64 = (1 << 53) - 1;

/// Payload for `donate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationCreateDto {
    pub answer_id: String,
    pub amount: i64,
}

impl DonationCreateDto {
    /// Parse a user-entered amount. Only integers in `1..=MAX_DONATION_AMOUNT`
    /// are accepted.
    pub fn parse(answer_id: &str, raw_amount: &str) -> Result<Self, ValidationError> {
        let raw = raw_amount.trim();
        let amount = raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAmount(raw.to_owned()))?;
        if !(1..=MAX_DONATION_AMOUNT).contains(&amount) {
            return Err(ValidationError::InvalidAmount(raw.to_owned()));
        }
        Ok(Self { answer_id: answer_id.to_owned(), amount })
    }
}
