//! Wallet session boundary.

/// The user's authenticated session against the NEAR account system.
///
/// `login` and `logout` hand control to the wallet; both end in a full page
/// reload, which is the only way the shell observes a session change.
pub trait WalletSession: Send + Sync {
    /// Synchronous signed-in query.
    fn is_signed_in(&self) -> bool;

    /// Current account id, `None` when signed out.
    fn account_id(&self) -> Option<String>;

    fn login(&self);

    fn logout(&self);
}
