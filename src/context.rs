//! Startup context handed from the bootstrapper to the application shell.

use std::sync::Arc;

use crate::net::contract::QaContract;
use crate::net::wallet::WalletSession;

/// Handles produced by SDK initialization.
///
/// Built once at startup and passed explicitly into [`crate::app::App`];
/// nothing reads these from window globals.
#[derive(Clone)]
pub struct AppContext {
    pub wallet: Arc<dyn WalletSession>,
    pub account_id: Option<String>,
    pub contract: Arc<dyn QaContract>,
}

impl AppContext {
    pub fn new(wallet: Arc<dyn WalletSession>, account_id: Option<String>, contract: Arc<dyn QaContract>) -> Self {
        Self { wallet, account_id, contract }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}
