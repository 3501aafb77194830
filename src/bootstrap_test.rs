use std::cell::Cell;
use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::testing::{RecordingSink, RecordingWallet, context_with};

// =============================================================
// Successful setup
// =============================================================

#[test]
fn successful_setup_mounts_with_context() {
    let sink = RecordingSink::default();
    let mounted = Cell::new(None);
    let wallet = Arc::new(RecordingWallet::signed_in("alice.testnet"));

    let result = block_on(boot(
        async move { Ok::<_, BootError>(context_with(wallet)) },
        |ctx| {
            mounted.set(Some(ctx.account_id));
            Ok(())
        },
        &sink,
    ));

    assert_eq!(result, Ok(()));
    assert_eq!(mounted.take(), Some(Some("alice.testnet".to_owned())));
    assert!(sink.reports().is_empty());
}

#[test]
fn mount_failure_is_reported() {
    let sink = RecordingSink::default();
    let wallet = Arc::new(RecordingWallet::signed_out());

    let result = block_on(boot(
        async move { Ok::<_, BootError>(context_with(wallet)) },
        |_| Err(BootError::MountPointMissing(MOUNT_POINT_ID.into())),
        &sink,
    ));

    let expected = BootError::MountPointMissing("root".into());
    assert_eq!(result, Err(expected.clone()));
    assert_eq!(sink.reports(), vec![expected]);
}

// =============================================================
// Failed setup
// =============================================================

#[test]
fn rejected_init_skips_mount_and_reaches_sink() {
    let sink = RecordingSink::default();
    let mount_calls = Cell::new(0);

    let result = block_on(boot(
        async { Err::<AppContext, _>(BootError::Init("network unreachable".into())) },
        |_| {
            mount_calls.set(mount_calls.get() + 1);
            Ok(())
        },
        &sink,
    ));

    assert_eq!(result, Err(BootError::Init("network unreachable".into())));
    assert_eq!(mount_calls.get(), 0);
    assert_eq!(sink.reports(), vec![BootError::Init("network unreachable".into())]);
}

#[test]
fn config_error_converts_and_skips_mount() {
    let sink = RecordingSink::default();
    let mount_calls = Cell::new(0);

    let init = async {
        crate::config::NetworkConfig::for_env("nowhere")
            .map_err(BootError::from)
            .and_then(|_| Err::<AppContext, _>(BootError::Init("unknown label must fail".into())))
    };
    let result = block_on(boot(
        init,
        |_| {
            mount_calls.set(mount_calls.get() + 1);
            Ok(())
        },
        &sink,
    ));

    let expected = BootError::Config(crate::config::ConfigError::Unconfigured("nowhere".into()));
    assert_eq!(result, Err(expected.clone()));
    assert_eq!(mount_calls.get(), 0);
    assert_eq!(sink.reports(), vec![expected]);
    assert_eq!(sink.reports()[0].to_string(), "unconfigured environment 'nowhere'");
}

#[test]
fn each_failure_is_reported_once() {
    let sink = RecordingSink::default();
    let _ = block_on(boot(async { Err::<AppContext, _>(BootError::Init("boom".into())) }, |_| Ok(()), &sink));
    assert_eq!(sink.reports().len(), 1);
}
