// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   phase (all/doc/dist), clean, list, config
//! ```

pub mod clean;
pub mod config;
pub mod list;
pub mod phase;

use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Cancels `token` when Ctrl+C arrives, interrupting the running
/// component command between pipeline steps.
fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, interrupting...");
            token.cancel();
        }
    });
}
