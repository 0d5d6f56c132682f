use annotate_snippets::{Level, Renderer, Snippet};
use clap::ValueEnum;
use colored::Colorize;
use gmlint_core::diagnostic::{Diagnostic, Severity};
use gmlint_core::fs::relativize_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};

fn show_hint_statistics(total_diagnostics: usize) {
    let n_violations = std::env::var("GMLINT_N_VIOLATIONS_HINT_STAT")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(15);
    if total_diagnostics > n_violations {
        println!(
            "\nMore than {n_violations} violations reported, use `--statistics` to get the count by rule."
        );
    }
}

/// Builds the "Found 2 errors and 1 warning." tail line. `None` when there
/// is nothing to report.
fn diagnostics_summary(n_errors: usize, n_warnings: usize) -> Option<String> {
    let errors = match n_errors {
        0 => None,
        1 => Some("1 error".to_string()),
        n => Some(format!("{n} errors")),
    };
    let warnings = match n_warnings {
        0 => None,
        1 => Some("1 warning".to_string()),
        n => Some(format!("{n} warnings")),
    };

    match (errors, warnings) {
        (Some(errors), Some(warnings)) => Some(format!("Found {errors} and {warnings}.")),
        (Some(errors), None) => Some(format!("Found {errors}.")),
        (None, Some(warnings)) => Some(format!("Found {warnings}.")),
        (None, None) => None,
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<&'a Diagnostic>,
    errors: Vec<JsonError>,
}

#[derive(Debug, Serialize)]
struct JsonError {
    file: String,
    error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    /// Print diagnostics with full context using annotated code snippets
    Full,
    /// Print diagnostics in a concise format, one per line
    Concise,
    /// Print diagnostics as GitHub format
    Github,
    /// Print diagnostics as JSON
    Json,
}

/// Takes the diagnostics and file errors in each file and then displays
/// them in different ways depending on the `--output-format` provided by the
/// user.
pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        let mut n_errors = 0usize;
        let mut n_warnings = 0usize;

        // First, print all file errors
        if !errors.is_empty() {
            writer.flush()?; // Flush before writing to stderr
            for (_path, err) in errors {
                let root_cause = err.chain().last().unwrap();
                if root_cause.is::<gmlint_core::error::InvalidInput>() {
                    eprintln!("{}: {}", "Error".red().bold(), root_cause);
                } else {
                    eprintln!("{}: {}", "Error".red().bold(), err);
                }
            }
        }

        // Cache relativized paths to avoid repeated filesystem operations
        let mut path_cache = std::collections::HashMap::new();

        // Then, print the diagnostics.
        for diagnostic in diagnostics {
            // Get or compute relativized path
            let relative_path = path_cache
                .entry(&diagnostic.filename)
                .or_insert_with(|| relativize_path(diagnostic.filename.clone()));

            let rule_name = match diagnostic.severity() {
                Severity::Error => diagnostic.message.name.red(),
                Severity::Warning => diagnostic.message.name.yellow(),
            };
            writeln!(
                writer,
                "{} [{}] {} {}",
                relative_path.white(),
                diagnostic.line,
                rule_name,
                diagnostic.message.body
            )?;

            match diagnostic.severity() {
                Severity::Error => n_errors += 1,
                Severity::Warning => n_warnings += 1,
            }
        }

        writer.flush()?; // Ensure all diagnostics are written before summary

        // Finally, print the info about the number of errors and warnings found.
        if let Some(summary) = diagnostics_summary(n_errors, n_warnings) {
            println!("\n{summary}");
            show_hint_statistics(n_errors + n_warnings);
        } else if errors.is_empty() {
            println!("All checks passed!");
        }

        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        // Convert errors to a serializable format
        let json_errors: Vec<JsonError> = errors
            .iter()
            .map(|(path, err)| JsonError { file: path.clone(), error: format!("{:#}", err) })
            .collect();

        let output = JsonOutput {
            diagnostics: diagnostics.to_vec(),
            errors: json_errors,
        };

        serde_json::to_writer_pretty(&mut writer, &output)?;
        writer.flush()?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        _errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        for diagnostic in diagnostics {
            // We want a message like this:
            // ::warning title=Gmlint (trailing_whitespace),file=scripts/foo.gml,line=4::scripts/foo.gml:4 [trailing_whitespace] Trailing whitespace
            //
            // The location appears twice:
            // - one between the "::" markers: this is for the annotation to
            //   appear when we browse changed files in Github PR;
            // - one after the "::" marker: this is so that the workflow shows
            //   the location of diagnostics when we inspect the workflow itself,
            //   without the Github annotations.
            writeln!(
                writer,
                "::{level} title=Gmlint ({name}),file={file},line={row}::{file}:{row} [{name}] {body}",
                level = diagnostic.severity(),
                name = diagnostic.message.name,
                file = diagnostic.filename.to_string_lossy(),
                row = diagnostic.line,
                body = diagnostic.message.body
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

pub struct FullEmitter;

/// Byte range of the 1-based `line` within `source`, for annotating snippets.
fn line_byte_range(source: &str, line: usize) -> Option<std::ops::Range<usize>> {
    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            return Some(offset..offset + text.len());
        }
        offset += text.len() + 1;
    }
    None
}

impl Emitter for FullEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        // Use plain renderer when NO_COLOR is set or in snapshots
        let use_colors = std::env::var("NO_COLOR").is_err();
        let renderer = if use_colors {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        let mut n_errors = 0usize;
        let mut n_warnings = 0usize;

        // First, print all file errors
        if !errors.is_empty() {
            writer.flush()?; // Flush before writing to stderr
            for (_path, err) in errors {
                let root_cause = err.chain().last().unwrap();
                if root_cause.is::<gmlint_core::error::InvalidInput>() {
                    eprintln!("{}: {}", "Error".red().bold(), root_cause);
                } else {
                    eprintln!("{}: {}", "Error".red().bold(), err);
                }
            }
            if !diagnostics.is_empty() {
                eprintln!(); // Add separator between errors and diagnostics
            }
        }

        // Cache file contents and relativized paths
        let mut file_cache: std::collections::HashMap<&std::path::Path, String> =
            std::collections::HashMap::new();
        let mut path_cache = std::collections::HashMap::new();

        // Pre-load all files into cache
        for diagnostic in diagnostics {
            if !file_cache.contains_key(diagnostic.filename.as_path()) {
                match fs::read_to_string(&diagnostic.filename) {
                    Ok(content) => {
                        file_cache.insert(diagnostic.filename.as_path(), content);
                    }
                    Err(err) => {
                        writer.flush()?; // Flush before writing to stderr
                        eprintln!(
                            "Warning: Could not read source file {}: {}",
                            diagnostic.filename.display(),
                            err
                        );
                    }
                }
            }
        }

        for diagnostic in diagnostics {
            // Get the source file from cache
            let Some(source) = file_cache.get(diagnostic.filename.as_path()) else {
                continue; // Skip if file couldn't be read
            };

            // The whole offending line is annotated, there are no column
            // positions to narrow it down further.
            let Some(range) = line_byte_range(source, diagnostic.line) else {
                continue;
            };

            // Get or compute relativized path
            let file_path = path_cache
                .entry(&diagnostic.filename)
                .or_insert_with(|| relativize_path(diagnostic.filename.clone()));

            let level = match diagnostic.severity() {
                Severity::Error => Level::Error,
                Severity::Warning => Level::Warning,
            };

            // Build the message with snippet
            let snippet = Snippet::source(source)
                .origin(file_path)
                .fold(true)
                .annotation(level.span(range).label(&diagnostic.message.body));

            let message = level.title(&diagnostic.message.name).snippet(snippet);

            let rendered = renderer.render(message);
            writeln!(writer, "{rendered}\n")?;

            match diagnostic.severity() {
                Severity::Error => n_errors += 1,
                Severity::Warning => n_warnings += 1,
            }
        }

        writer.flush()?; // Ensure all diagnostics are written before summary

        // Finally, print the info about the number of errors and warnings found.
        if let Some(summary) = diagnostics_summary(n_errors, n_warnings) {
            println!("{summary}");
            show_hint_statistics(n_errors + n_warnings);
        } else if errors.is_empty() {
            println!("All checks passed!");
        }

        Ok(())
    }
}
