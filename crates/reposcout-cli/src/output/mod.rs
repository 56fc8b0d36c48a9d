// SPDX-License-Identifier: Apache-2.0

//! Presentation of command results.
//!
//! Handlers hand back plain data. Structured formats (JSON, YAML) come
//! straight from `Serialize`; text and markdown are drawn by each result
//! type, which may trim decoration when `--quiet` is set.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{OutputContext, OutputFormat};

/// A command result that knows how to draw itself for people.
pub trait Renderable: Serialize {
    /// Plain terminal text. `ctx.quiet` drops padding and summaries.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Markdown; falls back to the text form.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Writes `result` to stdout in the format selected on the command line.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(result, ctx, &mut out)?;
    out.flush().context("Failed to flush output")
}

/// Writes `result` to `w` in `ctx.format`.
fn render_to<T: Renderable>(result: &T, ctx: &OutputContext, w: &mut dyn Write) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            writeln!(w, "{json}")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            write!(w, "{yaml}")?;
        }
        OutputFormat::Markdown => result
            .render_markdown(w, ctx)
            .context("Failed to render markdown")?,
        OutputFormat::Text => result.render_text(w, ctx).context("Failed to render text")?,
    }
    Ok(())
}

pub mod browse;
mod repos;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::ListResult;
    use reposcout_core::{RepositoryRecord, Summary};

    fn result() -> ListResult {
        ListResult {
            repositories: vec![RepositoryRecord::new("octo/cat", "https://x/octo/cat")],
            summary: Summary { visible: 1, total: 1 },
            query: String::new(),
        }
    }

    fn rendered(format: OutputFormat) -> String {
        let ctx = OutputContext {
            format,
            quiet: false,
            is_tty: false,
            progress: false,
        };
        let mut buf = Vec::new();
        render_to(&result(), &ctx, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_is_parseable() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();
        assert_eq!(value["summary"]["total"], 1);
    }

    #[test]
    fn test_yaml_names_fields() {
        let yaml = rendered(OutputFormat::Yaml);
        assert!(yaml.contains("full_name"));
        assert!(yaml.contains("octo/cat"));
    }
}
