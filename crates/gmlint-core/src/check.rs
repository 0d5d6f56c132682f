use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::diagnostic::*;
use crate::error::InvalidInput;
use crate::fs::{fixed_file_path, relativize_path};
use crate::lints::bracket_spacing::bracket_spacing::{bracket_spacing, fix_bracket_spacing};
use crate::lints::comma_spacing::comma_spacing::{comma_spacing, fix_comma_spacing};
use crate::lints::control_statement::control_statement::control_statement;
use crate::lints::indentation::indentation::indentation;
use crate::lints::line_length::line_length::line_length;
use crate::lints::naming_convention::naming_convention::naming_convention;
use crate::lints::trailing_whitespace::trailing_whitespace::trailing_whitespace;
use crate::lints::uninitialized_variable::uninitialized_variable::uninitialized_variable;
use crate::lints::unused_variable::unused_variable::unused_variable;
use crate::rule_set::{Rule, RuleSet};
use crate::split::{MAX_LINE_LENGTH, split_long_line};

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = read_source(&path)?;

    let report = lint_with_rules(&contents, &config.rules_to_apply);

    if config.write_fixed {
        let fixed_path = fixed_file_path(Path::new(&path));
        fs::write(&fixed_path, &report.fixed_text)
            .with_context(|| format!("Failed to write file: {}", fixed_path.display()))?;
    }

    // Errors first, then warnings, each in detection order. The filename is
    // only known here, the engine itself never sees paths.
    let diagnostics: Vec<Diagnostic> = report
        .errors
        .into_iter()
        .chain(report.warnings)
        .map(|mut diagnostic| {
            diagnostic.filename = PathBuf::from(&path);
            diagnostic
        })
        .collect();

    Ok(diagnostics)
}

fn read_source(path: &str) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;
    String::from_utf8(bytes).map_err(|_| {
        InvalidInput {
            filename: PathBuf::from(path),
        }
        .into()
    })
}

/// The outcome of one lint pass over one source text.
#[derive(Debug, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub fixed_text: String,
}

impl LintReport {
    fn new(diagnostics: Vec<Diagnostic>, fixed_text: String) -> Self {
        let (errors, warnings) = diagnostics
            .into_iter()
            .partition(|diagnostic| diagnostic.severity() == Severity::Error);

        Self {
            errors,
            warnings,
            fixed_text,
        }
    }
}

/// Lint one source text with every rule enabled.
pub fn lint(contents: &str) -> LintReport {
    lint_with_rules(contents, &RuleSet::all())
}

/// Lint one source text with the given rules.
///
/// Every line goes through the fixers first, then the splitter if it is
/// still too long, then the checks. The checks always see the fixed but
/// unsplit line, so an over-long line is reported at its original position
/// and with its pre-split length even when the fixed text wraps it.
pub fn lint_with_rules(contents: &str, rules: &RuleSet) -> LintReport {
    let mut checker = Checker::new(rules.clone());
    let mut fixed_lines: Vec<String> = Vec::new();

    for (index, line) in contents.split('\n').enumerate() {
        let line = apply_line_fixes(line, rules);

        if line.chars().count() > MAX_LINE_LENGTH {
            fixed_lines.push(split_long_line(&line));
        } else {
            fixed_lines.push(line.clone());
        }

        check_line(&line, index, &mut checker);
    }

    LintReport::new(checker.diagnostics, fixed_lines.join("\n"))
}

// Each fixer runs only when its rule is enabled. The splitter is not tied to
// a rule, it always runs on over-long lines.
fn apply_line_fixes(line: &str, rules: &RuleSet) -> String {
    let mut line = line.to_string();
    if rules.contains(&Rule::CommaSpacing) {
        line = fix_comma_spacing(&line);
    }
    if rules.contains(&Rule::BracketSpacing) {
        line = fix_bracket_spacing(&line);
    }
    line
}

#[derive(Debug)]
// The object that collects diagnostics in check_line(). One per linted file.
pub struct Checker {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // The rules enabled for this pass.
    pub rules: RuleSet,
}

impl Checker {
    fn new(rules: RuleSet) -> Self {
        Self {
            diagnostics: vec![],
            rules,
        }
    }

    // This takes an Option<Diagnostic> because each lint rule reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    pub(crate) fn report_all(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }
}

// Dispatches one line to every enabled rule, in declaration order of `Rule`.
//
// The spacing checks run after the fixers rewrote the line, so while their
// fixers are enabled they have nothing left to report.
pub fn check_line(line: &str, index: usize, checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::CommaSpacing) {
        checker.report_diagnostic(comma_spacing(line, index));
    }
    if checker.is_rule_enabled(Rule::BracketSpacing) {
        checker.report_all(bracket_spacing(line, index));
    }
    if checker.is_rule_enabled(Rule::LineLength) {
        checker.report_diagnostic(line_length(line, index));
    }
    if checker.is_rule_enabled(Rule::Indentation) {
        checker.report_diagnostic(indentation(line, index));
    }
    if checker.is_rule_enabled(Rule::TrailingWhitespace) {
        checker.report_diagnostic(trailing_whitespace(line, index));
    }
    if checker.is_rule_enabled(Rule::UninitializedVariable) {
        checker.report_diagnostic(uninitialized_variable(line, index));
    }
    if checker.is_rule_enabled(Rule::ControlStatement) {
        checker.report_diagnostic(control_statement(line, index));
    }
    if checker.is_rule_enabled(Rule::NamingConvention) {
        checker.report_diagnostic(naming_convention(line, index));
    }
    if checker.is_rule_enabled(Rule::UnusedVariable) {
        checker.report_diagnostic(unused_variable(line, index));
    }
}
