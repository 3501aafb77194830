use send_wrapper::SendWrapper;
use serde::Serialize;
use wasm_bindgen_futures::JsFuture;

use super::bindings::WalletConnection;
use super::js_error_message;
use crate::net::wallet::WalletSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInOptions<'a> {
    contract_id: &'a str,
}

/// [`WalletSession`] over the SDK `WalletConnection`.
pub struct BrowserWallet {
    connection: SendWrapper<WalletConnection>,
    contract_name: String,
}

impl BrowserWallet {
    pub fn new(connection: WalletConnection, contract_name: String) -> Self {
        Self { connection: SendWrapper::new(connection), contract_name }
    }
}

impl WalletSession for BrowserWallet {
    fn is_signed_in(&self) -> bool {
        self.connection.is_signed_in()
    }

    fn account_id(&self) -> Option<String> {
        self.connection
            .get_account_id()
            .as_string()
            .filter(|id| !id.is_empty())
    }

    /// Redirects to the wallet; the page reloads on return.
    fn login(&self) {
        let options = match serde_wasm_bindgen::to_value(&SignInOptions { contract_id: &self.contract_name }) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to encode sign-in options: {e}");
                return;
            }
        };
        let promise = self.connection.request_sign_in(&options);
        leptos::task::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::error!("wallet sign-in failed: {}", js_error_message(&e));
            }
        });
    }

    /// Clears the wallet keys and reloads the current page without query or hash.
    fn logout(&self) {
        self.connection.sign_out();
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let target = match (location.origin(), location.pathname()) {
                (Ok(origin), Ok(path)) => format!("{origin}{path}"),
                _ => "/".to_owned(),
            };
            if let Err(e) = location.replace(&target) {
                log::error!("reload after sign-out failed: {}", js_error_message(&e));
            }
        }
    }
}
