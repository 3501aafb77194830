//! # qanda-near
//!
//! Leptos + WASM front-end for the Q&A on NEAR application.
//!
//! The crate is a thin shell: a bootstrapper that initializes the NEAR
//! wallet/contract SDK, an application shell with a login/logout header, and
//! two routed pages that read and write through the deployed contract. All
//! account and persistence logic stays in the external SDK.
//!
//! Browser-only code (SDK bindings, mounting) sits behind the `csr` feature so
//! the rest of the crate builds and tests natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod context;
#[cfg(feature = "csr")]
pub mod near;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install diagnostics, then run the two-phase startup.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    wasm_bindgen_futures::spawn_local(async {
        // Failures are already reported to the console sink.
        let _ = bootstrap::boot(bootstrap::setup(), bootstrap::mount_root, &bootstrap::ConsoleSink).await;
    });
}
