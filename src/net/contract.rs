//! Contract client boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages talk to the deployed Q&A contract only through [`QaContract`]. The
//! browser build backs it with the SDK `Contract` object; tests substitute
//! canned implementations.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields a `Result` with a cloneable [`ContractError`] so failures
//! can sit inside a `LocalResource` and render inline.
//!
//! DECODING
//! ========
//! Results are decoded from JSON text with `serde_json`, not from JS values.
//! `created_time` is a nanosecond timestamp beyond 2^53, which the SDK hands
//! over as an unsafe JS number; the JSON text still carries it as an integer.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::types::{Answer, AnswerCreateDto, DonateInfo, DonationCreateDto, Question, QuestionCreateDto};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("contract call {method} failed: {message}")]
    Call { method: String, message: String },
    #[error("could not decode {method} result: {message}")]
    Decode { method: String, message: String },
}

pub type ContractResult<T> = Result<T, ContractError>;

/// View and change methods exposed by the Q&A contract.
///
/// Futures are local: the wasm runtime is single-threaded and the SDK
/// promises are not `Send`.
pub trait QaContract: Send + Sync {
    fn list_questions(&self) -> LocalBoxFuture<'_, ContractResult<Vec<Question>>>;

    fn question_detail(&self, question_id: &str) -> LocalBoxFuture<'_, ContractResult<Option<Question>>>;

    fn answers_for_question(&self, question_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<Answer>>>;

    fn donate_history(&self, answer_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<DonateInfo>>>;

    fn create_question(&self, question: QuestionCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Question>>>;

    fn create_answer(&self, answer: AnswerCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Answer>>>;

    fn donate(&self, donation: DonationCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<DonateInfo>>>;
}

/// Decode the JSON text of a contract result.
///
/// `None` stands for an `undefined` result and decodes like `null`.
pub fn decode_result<T: DeserializeOwned>(method: &str, json: Option<&str>) -> ContractResult<T> {
    serde_json::from_str(json.unwrap_or("null")).map_err(|e| ContractError::Decode {
        method: method.to_owned(),
        message: e.to_string(),
    })
}
