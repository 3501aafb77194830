//! [`QaContract`] over the SDK `Contract` object.
//!
//! The SDK attaches one async function per configured method name. Each call
//! passes a single args object. The resolved value goes back through
//! `JSON.stringify` and is decoded by [`decode_result`].

use futures::future::LocalBoxFuture;
use send_wrapper::SendWrapper;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::bindings::Contract;
use super::js_error_message;
use crate::net::contract::{ContractError, ContractResult, QaContract, decode_result};
use crate::net::types::{Answer, AnswerCreateDto, DonateInfo, DonationCreateDto, Question, QuestionCreateDto};

#[derive(Serialize)]
struct QuestionIdArgs<'a> {
    question_id: &'a str,
}

#[derive(Serialize)]
struct AnswerIdArgs<'a> {
    answer_id: &'a str,
}

#[derive(Serialize)]
struct CreateQuestionArgs {
    question: QuestionCreateDto,
}

#[derive(Serialize)]
struct CreateAnswerArgs {
    answer: AnswerCreateDto,
}

#[derive(Serialize)]
struct DonateArgs {
    donation: DonationCreateDto,
}

#[derive(Serialize)]
struct NoArgs {}

pub struct BrowserContract {
    handle: SendWrapper<Contract>,
}

impl BrowserContract {
    pub fn new(handle: Contract) -> Self {
        Self { handle: SendWrapper::new(handle) }
    }

    async fn call<A, T>(&self, method: &'static str, args: &A) -> ContractResult<T>
    where
        A: Serialize,
        T: DeserializeOwned,
    {
        let call_err = |message: String| ContractError::Call { method: method.to_owned(), message };

        let args = serde_wasm_bindgen::to_value(args).map_err(|e| call_err(e.to_string()))?;
        let target: &JsValue = &self.handle;
        let function = js_sys::Reflect::get(target, &JsValue::from_str(method))
            .map_err(|e| call_err(js_error_message(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| call_err("method is not configured on the contract".to_owned()))?;
        let returned = function
            .call1(target, &args)
            .map_err(|e| call_err(js_error_message(&e)))?;
        let value = JsFuture::from(js_sys::Promise::resolve(&returned))
            .await
            .map_err(|e| call_err(js_error_message(&e)))?;

        log::debug!("contract call {method} resolved");
        let json = js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string());
        decode_result(method, json.as_deref())
    }
}

impl QaContract for BrowserContract {
    fn list_questions(&self) -> LocalBoxFuture<'_, ContractResult<Vec<Question>>> {
        Box::pin(async move { self.call("get_list_question", &NoArgs {}).await })
    }

    fn question_detail(&self, question_id: &str) -> LocalBoxFuture<'_, ContractResult<Option<Question>>> {
        let question_id = question_id.to_owned();
        Box::pin(async move {
            self.call("get_question_detail", &QuestionIdArgs { question_id: &question_id })
                .await
        })
    }

    fn answers_for_question(&self, question_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<Answer>>> {
        let question_id = question_id.to_owned();
        Box::pin(async move {
            self.call("get_list_answer_for_question", &QuestionIdArgs { question_id: &question_id })
                .await
        })
    }

    fn donate_history(&self, answer_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<DonateInfo>>> {
        let answer_id = answer_id.to_owned();
        Box::pin(async move { self.call("get_donate_history", &AnswerIdArgs { answer_id: &answer_id }).await })
    }

    fn create_question(&self, question: QuestionCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Question>>> {
        Box::pin(async move { self.call("create_question", &CreateQuestionArgs { question }).await })
    }

    fn create_answer(&self, answer: AnswerCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Answer>>> {
        Box::pin(async move { self.call("create_answer", &CreateAnswerArgs { answer }).await })
    }

    fn donate(&self, donation: DonationCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<DonateInfo>>> {
        Box::pin(async move { self.call("donate", &DonateArgs { donation }).await })
    }
}
