//! Test doubles for the SDK boundaries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{self, LocalBoxFuture};

use crate::bootstrap::{BootError, DiagnosticSink};
use crate::context::AppContext;
use crate::net::contract::{ContractResult, QaContract};
use crate::net::types::{Answer, AnswerCreateDto, DonateInfo, DonationCreateDto, Question, QuestionCreateDto};
use crate::net::wallet::WalletSession;

/// Wallet that records which delegate ran.
#[derive(Default)]
pub struct RecordingWallet {
    signed_in: AtomicBool,
    account_id: Option<String>,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingWallet {
    pub fn signed_in(account_id: &str) -> Self {
        Self {
            signed_in: AtomicBool::new(true),
            account_id: Some(account_id.to_owned()),
            calls: Mutex::default(),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn set_signed_in(&self, value: bool) {
        self.signed_in.store(value, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl WalletSession for RecordingWallet {
    fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    fn account_id(&self) -> Option<String> {
        self.account_id.clone()
    }

    fn login(&self) {
        self.calls.lock().unwrap().push("login");
    }

    fn logout(&self) {
        self.calls.lock().unwrap().push("logout");
    }
}

/// Contract with nothing deployed behind it.
pub struct EmptyContract;

impl QaContract for EmptyContract {
    fn list_questions(&self) -> LocalBoxFuture<'_, ContractResult<Vec<Question>>> {
        Box::pin(future::ready(Ok(Vec::new())))
    }

    fn question_detail(&self, _question_id: &str) -> LocalBoxFuture<'_, ContractResult<Option<Question>>> {
        Box::pin(future::ready(Ok(None)))
    }

    fn answers_for_question(&self, _question_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<Answer>>> {
        Box::pin(future::ready(Ok(Vec::new())))
    }

    fn donate_history(&self, _answer_id: &str) -> LocalBoxFuture<'_, ContractResult<Vec<DonateInfo>>> {
        Box::pin(future::ready(Ok(Vec::new())))
    }

    fn create_question(&self, _question: QuestionCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Question>>> {
        Box::pin(future::ready(Ok(None)))
    }

    fn create_answer(&self, _answer: AnswerCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<Answer>>> {
        Box::pin(future::ready(Ok(None)))
    }

    fn donate(&self, _donation: DonationCreateDto) -> LocalBoxFuture<'_, ContractResult<Option<DonateInfo>>> {
        Box::pin(future::ready(Ok(None)))
    }
}

/// Sink that keeps every reported error.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<BootError>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<BootError> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: &BootError) {
        self.reports.lock().unwrap().push(error.clone());
    }
}

pub fn context_with(wallet: Arc<RecordingWallet>) -> AppContext {
    let account_id = wallet.account_id();
    AppContext::new(wallet, account_id, Arc::new(EmptyContract))
}
