#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::wallet::WalletSession;

/// Sign-in status as observed when the shell mounted.
///
/// Captured exactly once; there is no subscription to the wallet, so the
/// value only changes when the page reloads and the shell mounts again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub signed_in: bool,
    pub account_id: Option<String>,
}

impl SessionState {
    /// Query the wallet once. The account id is dropped when signed out.
    pub fn capture(wallet: &dyn WalletSession, account_id: Option<String>) -> Self {
        let signed_in = wallet.is_signed_in();
        Self {
            signed_in,
            account_id: account_id.filter(|id| signed_in && !id.is_empty()),
        }
    }

    /// The header action offered for this session.
    pub fn action(&self) -> SessionAction {
        if self.signed_in { SessionAction::Logout } else { SessionAction::Login }
    }
}

/// The single action bound to the header button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login,
    Logout,
}

impl SessionAction {
    pub fn label(self) -> &'static str {
        match self {
            SessionAction::Login => "Login",
            SessionAction::Logout => "Logout",
        }
    }

    /// Invoke the matching wallet delegate and nothing else.
    pub fn dispatch(self, wallet: &dyn WalletSession) {
        log::debug!("session action: {}", self.label());
        match self {
            SessionAction::Login => wallet.login(),
            SessionAction::Logout => wallet.logout(),
        }
    }
}
