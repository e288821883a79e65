//! Check command implementation.

use anyhow::{Context, Result};
use objc_lint_core::input::{read_declarations, read_declarations_from_file, InputError};
use objc_lint_core::{Checker, Declaration, LintResult};
use objc_lint_rules::all_rules;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Violations are warnings and never fail the run; only unreadable input or
/// configuration does.
pub fn run(
    inputs: &[PathBuf],
    format: OutputFormat,
    system_prefix: Option<PathBuf>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;

    let mut builder = Checker::builder().config(config).rules(all_rules());
    if let Some(prefix) = system_prefix {
        builder = builder.system_prefix(prefix);
    }
    let checker = builder.build();

    tracing::info!(
        "Checking with {} rules, system prefix {:?}",
        checker.rule_count(),
        checker.origin_filter().system_prefix()
    );

    let mut result = LintResult::new();
    if inputs.is_empty() {
        check_stdin(&checker, &mut result)?;
    }
    for input in inputs {
        if input == Path::new("-") {
            check_stdin(&checker, &mut result)?;
        } else {
            let decls = read_declarations_from_file(input)?;
            check_stream(&checker, decls, &input.display().to_string(), &mut result)?;
        }
    }

    super::output::print(&result, format)
}

fn check_stdin(checker: &Checker, result: &mut LintResult) -> Result<()> {
    let decls = read_declarations(std::io::stdin().lock());
    check_stream(checker, decls, "<stdin>", result)
}

fn check_stream<I>(checker: &Checker, decls: I, label: &str, result: &mut LintResult) -> Result<()>
where
    I: Iterator<Item = Result<Declaration, InputError>>,
{
    let before = result.violations.len();

    for decl in decls {
        let decl = decl.with_context(|| format!("Failed to read declarations from {label}"))?;
        if checker.on_declaration_visited(&decl, result) {
            result.declarations_checked += 1;
        }
    }

    tracing::debug!(
        "{}: {} violation(s)",
        label,
        result.violations.len() - before
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Config;
    use objc_lint_rules::standard_checker;

    const STREAM: &str = r#"
{"kind": "type", "name": "fooView", "location": {"file": "/src/App/FooView.h", "line": 3, "column": 12, "offset": 40}}
{"kind": "property", "name": "Title",
 "location": {"file": "/src/App/FooView.h", "line": 5, "column": 30, "offset": 90},
 "type": "NSString *", "attributes": ["nonatomic", "copy"]}
{"kind": "type", "name": "uiView", "location": {"file": "/Applications/Xcode.app/SDK/UIView.h", "line": 1, "column": 12}}
{"kind": "property", "name": "count",
 "location": {"file": "", "line": 0, "column": 0},
 "type": "int"}
"#;

    #[test]
    fn violations_do_not_fail_the_run() {
        let checker = standard_checker(Config::default());
        let mut result = LintResult::new();

        let decls = read_declarations(STREAM.as_bytes());
        check_stream(&checker, decls, "decls.json", &mut result)
            .expect("violations are not errors");

        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.violations[0].code, "OC001");
        assert_eq!(result.violations[1].code, "OC003");
    }

    #[test]
    fn counts_only_user_code_declarations() {
        let checker = standard_checker(Config::default());
        let mut result = LintResult::new();

        let decls = read_declarations(STREAM.as_bytes());
        check_stream(&checker, decls, "decls.json", &mut result)
            .expect("stream is valid");

        assert_eq!(result.declarations_checked, 2);
    }

    #[test]
    fn counts_accumulate_across_streams() {
        let checker = standard_checker(Config::default());
        let mut result = LintResult::new();

        for label in ["a.json", "b.json"] {
            let decls = read_declarations(STREAM.as_bytes());
            check_stream(&checker, decls, label, &mut result)
                .expect("stream is valid");
        }

        assert_eq!(result.declarations_checked, 4);
        assert_eq!(result.violations.len(), 4);
    }

    #[test]
    fn malformed_declaration_names_its_input() {
        let stream = r#"
{"kind": "type", "name": "Foo", "location": {"file": "/src/Foo.h", "line": 1, "column": 12}}
{"kind": "type", "name": 
"#;
        let checker = standard_checker(Config::default());
        let mut result = LintResult::new();

        let decls = read_declarations(stream.as_bytes());
        let err = check_stream(&checker, decls, "broken.json", &mut result).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to read declarations from broken.json"));
        assert_eq!(result.declarations_checked, 1);
        assert!(result.violations.is_empty());
    }
}
