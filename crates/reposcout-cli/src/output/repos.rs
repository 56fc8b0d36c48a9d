// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::{ListResult, OpenResult};

use super::Renderable;

/// Shown when the token sees no repositories at all.
pub const NO_REPOSITORIES: &str = "No repositories found for this token.";

/// Shown when repositories exist but none match the query.
pub const NO_MATCHES: &str = "No repositories match that filter.";

impl Renderable for ListResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.quiet {
            for repo in &self.repositories {
                writeln!(w, "{}\t{}", repo.display_name, repo.web_url)?;
            }
            return Ok(());
        }

        writeln!(w)?;
        if self.repositories.is_empty() {
            let message = if self.summary.total == 0 {
                NO_REPOSITORIES
            } else {
                NO_MATCHES
            };
            writeln!(w, "{}", style(message).yellow())?;
        } else {
            let width = self
                .repositories
                .iter()
                .map(|r| r.display_name.len())
                .max()
                .unwrap_or(0);
            for repo in &self.repositories {
                writeln!(
                    w,
                    "  {}  {}",
                    style(format!("{:<width$}", repo.display_name)).cyan(),
                    style(&repo.web_url).dim()
                )?;
            }
        }

        writeln!(w)?;
        writeln!(w, "{}", style(self.summary).bold())?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if !ctx.quiet {
            writeln!(w, "## Repositories\n")?;
        }
        for repo in &self.repositories {
            writeln!(w, "- [{}]({})", repo.display_name, repo.web_url)?;
        }
        if !ctx.quiet {
            writeln!(w, "\n_{}_", self.summary)?;
        }
        Ok(())
    }
}

impl Renderable for OpenResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.quiet {
            return writeln!(w, "{}", self.repository.web_url);
        }
        writeln!(
            w,
            "{} Opened {} ({})",
            style("*").green().bold(),
            style(&self.repository.display_name).cyan(),
            self.repository.web_url
        )
    }

    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.quiet {
            return writeln!(w, "<{}>", self.repository.web_url);
        }
        writeln!(
            w,
            "Opened [{}]({})",
            self.repository.display_name, self.repository.web_url
        )
    }
}
