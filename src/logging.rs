// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once. `RUST_LOG` adds to the defaults.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let level = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
