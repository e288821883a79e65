//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{GraphicalReportHandler, NamedSource, Report};
use objc_lint_core::{LintResult, Violation, ViolationDiagnostic};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let mut sources = SourceCache::default();
    let handler = GraphicalReportHandler::new();

    for violation in &result.violations {
        match sources.get(&violation.location.file) {
            Some(source) => {
                let report = Report::new(ViolationDiagnostic::from(violation))
                    .with_source_code(NamedSource::new(
                        violation.location.file.display().to_string(),
                        source.to_string(),
                    ));
                let mut rendered = String::new();
                if handler.render_report(&mut rendered, &*report).is_ok() {
                    println!("{rendered}");
                } else {
                    print_plain(violation);
                }
            }
            None => print_plain(violation),
        }
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} declaration(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.declarations_checked
    );
}

fn print_plain(violation: &Violation) {
    println!("{}", violation.format());
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

/// Source files read for snippet rendering, loaded at most once each.
#[derive(Default)]
struct SourceCache {
    files: HashMap<PathBuf, Option<Arc<String>>>,
}

impl SourceCache {
    fn get(&mut self, path: &Path) -> Option<Arc<String>> {
        self.files
            .entry(path.to_path_buf())
            .or_insert_with(|| match std::fs::read_to_string(path) {
                Ok(content) => Some(Arc::new(content)),
                Err(e) => {
                    tracing::debug!("No source snippet for {}: {}", path.display(), e);
                    None
                }
            })
            .clone()
    }
}
