//! Two-phase startup: async SDK setup, then a synchronous mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! `lib.rs` drives this once per page load. Setup either yields an
//! [`AppContext`] or a [`BootError`]; only a successful setup reaches the
//! mount step. There is no retry: a failed setup leaves `#root` empty.
//!
//! ERROR HANDLING
//! ==============
//! Errors are both reported to a [`DiagnosticSink`] and returned, so the
//! caller decides whether anything else should happen.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::future::Future;

use crate::config::ConfigError;
use crate::context::AppContext;

/// Element id the application shell mounts into.
pub const MOUNT_POINT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("contract initialization failed: {0}")]
    Init(String),
    #[error("mount point #{0} not found")]
    MountPointMissing(String),
}

/// Where startup failures go.
pub trait DiagnosticSink {
    fn report(&self, error: &BootError);
}

/// Reports through the `log` facade (the browser console in wasm builds).
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, error: &BootError) {
        log::error!("{error}");
    }
}

/// Await `init`, then hand its context to `mount`.
///
/// `mount` is never called when `init` fails.
pub async fn boot<Fut, M, S>(init: Fut, mount: M, sink: &S) -> Result<(), BootError>
where
    Fut: Future<Output = Result<AppContext, BootError>>,
    M: FnOnce(AppContext) -> Result<(), BootError>,
    S: DiagnosticSink + ?Sized,
{
    let result = match init.await {
        Ok(ctx) => {
            log::info!("contract initialized (account: {})", ctx.account_id.as_deref().unwrap_or("-"));
            mount(ctx)
        }
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        sink.report(e);
    }
    result
}

/// Setup phase for the browser: resolve the network config, then initialize
/// the SDK.
#[cfg(feature = "csr")]
pub async fn setup() -> Result<AppContext, BootError> {
    let config = crate::config::NetworkConfig::for_env(crate::config::active_env_label())?;
    crate::near::init_contract(&config).await
}

/// Mount the application shell into `#root`.
#[cfg(feature = "csr")]
pub fn mount_root(ctx: AppContext) -> Result<(), BootError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| BootError::MountPointMissing(MOUNT_POINT_ID.to_owned()))?;

    leptos::mount::mount_to(root, move || view! { <App ctx/> }).forget();
    log::debug!("application mounted into #{MOUNT_POINT_ID}");
    Ok(())
}
