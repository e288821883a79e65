//! Checker that routes visited declarations to rules.

use crate::config::Config;
use crate::decl::Declaration;
use crate::origin::OriginFilter;
use crate::rule::{Rule, RuleBox};
use crate::sink::DiagnosticSink;
use crate::types::Violation;

use std::path::PathBuf;
use tracing::{debug, info};

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    system_prefix: Option<PathBuf>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the checker.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules to the checker.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the system prefix from the configuration.
    #[must_use]
    pub fn system_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.system_prefix = Some(prefix.into());
        self
    }

    /// Builds the checker.
    #[must_use]
    pub fn build(self) -> Checker {
        let config = self.config.unwrap_or_default();
        let filter = match self.system_prefix {
            Some(prefix) => OriginFilter::new(prefix),
            None => config.origin_filter(),
        };

        Checker {
            filter,
            rules: self.rules,
        }
    }
}

/// Dispatches declarations from user code to the registered rules.
///
/// The checker keeps no state between declarations; each call to
/// [`Checker::on_declaration_visited`] is independent of every other.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    filter: OriginFilter,
    rules: Vec<RuleBox>,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the origin filter in use.
    #[must_use]
    pub fn origin_filter(&self) -> &OriginFilter {
        &self.filter
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks one declaration and forwards its violations to `sink`.
    ///
    /// Returns `false` without touching the sink if the declaration is not
    /// user code. Any user-code declaration returns `true`, including an
    /// unnamed one that no rule inspects, so counting `true` results counts
    /// declarations that passed the origin filter.
    pub fn on_declaration_visited<S>(&self, decl: &Declaration, sink: &mut S) -> bool
    where
        S: DiagnosticSink + ?Sized,
    {
        if !self.filter.is_user_code(decl.origin_file()) {
            return false;
        }

        let name = decl.name();
        if name.is_empty() {
            debug!("Skipping unnamed {} declaration", decl.kind());
            return true;
        }

        debug!(
            "Checking {} {} at {}:{}",
            decl.kind(),
            name,
            decl.origin_file().display(),
            decl.location().line
        );

        for violation in self.check(decl) {
            sink.report(violation);
        }
        true
    }

    /// Runs every rule matching the declaration's kind.
    fn check(&self, decl: &Declaration) -> Vec<Violation> {
        let kind = decl.kind();
        let mut violations = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.kind() == kind) {
            let found = match decl {
                Declaration::Type(ty) => rule.check_type(ty),
                Declaration::Property(prop) => rule.check_property(prop),
                Declaration::Method(method) => rule.check_method(method),
            };
            violations.extend(found);
        }

        violations
    }

    /// Checks every declaration of a stream.
    ///
    /// Returns the number of declarations that passed the origin filter.
    pub fn check_all<I, S>(&self, decls: I, sink: &mut S) -> usize
    where
        I: IntoIterator<Item = Declaration>,
        S: DiagnosticSink + ?Sized,
    {
        let checked = decls
            .into_iter()
            .filter(|decl| self.on_declaration_visited(decl, &mut *sink))
            .count();

        info!("Checked {} user declarations", checked);
        checked
    }
}
