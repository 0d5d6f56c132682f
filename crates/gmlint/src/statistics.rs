use colored::Colorize;
use gmlint_core::diagnostic::{Diagnostic, Severity};
use std::{collections::HashMap, path::PathBuf};

use crate::status::ExitStatus;

pub fn print_statistics(
    diagnostics: &[&Diagnostic],
    parent_config_path: Option<PathBuf>,
) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        println!("All checks passed!");
        return Ok(ExitStatus::Success);
    }

    // Hashmap with rule name as key, and (number of occurrences, severity) as
    // value. Every rule reports at a single severity.
    let mut hm: HashMap<&String, (usize, Severity)> = HashMap::new();

    for diagnostic in diagnostics {
        let entry = hm
            .entry(&diagnostic.message.name)
            .or_insert((0, diagnostic.severity()));
        entry.0 += 1;
    }

    // Most frequent rules first, ties broken by name so the output is stable.
    let mut sorted: Vec<_> = hm.iter().collect();
    sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));

    for (key, value) in sorted {
        let rule_name = match value.1 {
            Severity::Error => key.bold().red(),
            Severity::Warning => key.bold().yellow(),
        };
        println!("{:>5} {}", value.0.to_string().bold(), rule_name);
    }

    // Inform the user if the config file used comes from a parent directory.
    if let Some(config_path) = parent_config_path {
        println!("\nUsed '{}'", config_path.display());
    }

    Ok(ExitStatus::Failure)
}
