//! SIGINT handling.
//!
//! [`install`] starts a background thread that waits on
//! [`tokio::signal::ctrl_c`] and raises a process-wide flag. The lint
//! pipeline polls the flag between files and stages and stops with
//! [`LintError::Interrupted`] so an interrupted run never reports success.
//! A second Ctrl-C exits immediately.

use crate::error::{LintError, Result, EXIT_INTERRUPTED};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the Ctrl-C listener. Safe to call more than once; only the first
/// call registers the handler.
pub fn install() {
    static INSTALLED: AtomicBool = AtomicBool::new(false);
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let spawned = std::thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(|| {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::warn!("cannot listen for Ctrl-C: {e}");
                    return;
                }
            };
            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_err() {
                    return;
                }
                tracing::warn!("interrupt received, stopping");
                raise();

                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(EXIT_INTERRUPTED);
                }
            });
        });

    if let Err(e) = spawned {
        tracing::warn!("cannot spawn Ctrl-C listener: {e}");
    }
}

/// Sets the flag as if Ctrl-C had been pressed. Every later [`check`] fails.
pub fn raise() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Returns [`LintError::Interrupted`] once Ctrl-C has been pressed.
pub fn check() -> Result<()> {
    if is_interrupted() {
        Err(LintError::Interrupted)
    } else {
        Ok(())
    }
}
