//! Browser bindings to the NEAR SDK and the startup initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs the `nearApi` global loaded by the host page, so the
//! module only exists in `csr` builds. It produces the [`AppContext`] the
//! bootstrapper mounts with; no handle is ever stored on `window`.

mod bindings;
pub mod contract;
pub mod wallet;

use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::bootstrap::BootError;
use crate::config::{CHANGE_METHODS, NetworkConfig, VIEW_METHODS};
use crate::context::AppContext;
use crate::net::wallet::WalletSession;

use self::bindings::{BrowserLocalStorageKeyStore, Contract, WalletConnection};
use self::contract::BrowserContract;
use self::wallet::BrowserWallet;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContractOptions {
    view_methods: &'static [&'static str],
    change_methods: &'static [&'static str],
}

/// Connect to NEAR, open the wallet connection and bind the Q&A contract.
pub async fn init_contract(config: &NetworkConfig) -> Result<AppContext, BootError> {
    let encode_err = |e: serde_wasm_bindgen::Error| BootError::Init(e.to_string());

    let connect_config = serde_wasm_bindgen::to_value(config).map_err(encode_err)?;
    set_property(&connect_config, "keyStore", &BrowserLocalStorageKeyStore::new())?;
    set_property(&connect_config, "headers", &js_sys::Object::new())?;

    log::info!("connecting to NEAR {} via {}", config.network_id, config.node_url);
    let near = bindings::connect(connect_config)
        .await
        .map_err(|e| BootError::Init(js_error_message(&e)))?;

    let connection = WalletConnection::new(&near, &JsValue::NULL);

    let options = serde_wasm_bindgen::to_value(&ContractOptions {
        view_methods: VIEW_METHODS,
        change_methods: CHANGE_METHODS,
    })
    .map_err(encode_err)?;
    let contract = Contract::new(&connection.account(), &config.contract_name, &options);

    let wallet = BrowserWallet::new(connection, config.contract_name.clone());
    let account_id = wallet.account_id();

    Ok(AppContext::new(Arc::new(wallet), account_id, Arc::new(BrowserContract::new(contract))))
}

fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), BootError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| BootError::Init(js_error_message(&e)))
}

/// Flatten a thrown JS value into a message: `error.message`, else the string
/// itself, else its debug form.
pub fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
