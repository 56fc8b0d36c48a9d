// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the reposcout CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! reposcout list
//!
//! # Per-page fetch details
//! RUST_LOG=reposcout_core=debug reposcout list
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default directives when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "reposcout_cli=warn,reposcout_core=warn,reqwest=error";

/// Directives used with `--verbose`.
const VERBOSE_FILTER: &str = "reposcout_cli=debug,reposcout_core=debug,reqwest=warn";

/// Initialize the logging subsystem.
///
/// `RUST_LOG` always wins; otherwise `verbose` selects debug-level output
/// for reposcout's own crates.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
