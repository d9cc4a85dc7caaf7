// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::{prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber once. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}
