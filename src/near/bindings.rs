//! `near-api-js` imports.
//!
//! The browser bundle exposes the SDK as the `nearApi` global. Only the
//! handful of entry points the shell needs are bound here.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `nearApi.connect(config)`, resolving to a `Near` connection.
    #[wasm_bindgen(js_namespace = nearApi, js_name = connect, catch)]
    pub async fn connect(config: JsValue) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["nearApi", "keyStores"])]
    pub type BrowserLocalStorageKeyStore;

    #[wasm_bindgen(constructor, js_namespace = ["nearApi", "keyStores"])]
    pub fn new() -> BrowserLocalStorageKeyStore;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = nearApi)]
    pub type WalletConnection;

    /// `new nearApi.WalletConnection(near, appKeyPrefix)`.
    #[wasm_bindgen(constructor, js_namespace = nearApi)]
    pub fn new(near: &JsValue, app_key_prefix: &JsValue) -> WalletConnection;

    #[wasm_bindgen(method, js_name = isSignedIn)]
    pub fn is_signed_in(this: &WalletConnection) -> bool;

    /// Empty string or `null` when signed out, depending on SDK version.
    #[wasm_bindgen(method, js_name = getAccountId)]
    pub fn get_account_id(this: &WalletConnection) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn account(this: &WalletConnection) -> JsValue;

    #[wasm_bindgen(method, js_name = requestSignIn)]
    pub fn request_sign_in(this: &WalletConnection, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    pub fn sign_out(this: &WalletConnection);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = nearApi)]
    pub type Contract;

    /// `new nearApi.Contract(account, contractId, { viewMethods, changeMethods })`.
    #[wasm_bindgen(constructor, js_namespace = nearApi)]
    pub fn new(account: &JsValue, contract_id: &str, options: &JsValue) -> Contract;
}
