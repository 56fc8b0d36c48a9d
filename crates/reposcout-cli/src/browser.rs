// SPDX-License-Identifier: Apache-2.0

//! Opens repository pages in the user's default browser.

use reposcout_core::{ReposcoutError, UrlLauncher};
use tracing::debug;

/// Launches URLs through the platform's default browser.
pub struct SystemBrowser;

impl UrlLauncher for SystemBrowser {
    fn open(&self, url: &str) -> reposcout_core::Result<()> {
        debug!(url, "Launching browser");
        webbrowser::open(url).map_err(|e| launch_error(url, &e))
    }
}

fn launch_error(url: &str, err: &std::io::Error) -> ReposcoutError {
    ReposcoutError::Launch {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_launch_failure_keeps_url_and_reason() {
        let err = launch_error(
            "https://github.com/octo/cat?tab=readme&x=^",
            &io::Error::new(io::ErrorKind::NotFound, "no browser available"),
        );
        assert_eq!(
            err.to_string(),
            "Could not open https://github.com/octo/cat?tab=readme&x=^: no browser available"
        );
    }
}
