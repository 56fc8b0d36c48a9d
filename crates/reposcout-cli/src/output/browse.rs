// SPDX-License-Identifier: Apache-2.0

//! Terminal drawing for the interactive browse session.

use console::style;
use reposcout_core::DisplayState;

use super::repos::{NO_MATCHES, NO_REPOSITORIES};

/// Prints the search screen header: filter, empty-state message and summary.
///
/// The entries themselves are shown by the picker.
pub fn print_state(state: &DisplayState, collection_empty: bool) {
    println!();
    if collection_empty {
        println!("{}", style(NO_REPOSITORIES).yellow());
    } else if state.entries.is_empty() {
        println!("{}", style(NO_MATCHES).yellow());
    }
    println!("{}", style(state.summary).bold());
}

/// Prints a transient error message.
pub fn print_notification(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
