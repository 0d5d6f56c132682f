use crate::discovery::DiscoveredSettings;
use crate::rule_set::{ALL_RULES, Category, Rule, RuleSet};
use crate::settings::Settings;
use anyhow::Result;
use std::{collections::HashSet, path::PathBuf};

#[derive(Clone, Debug)]
/// Arguments provided in the CLI.
pub struct ArgsConfig {
    /// Paths to files to lint.
    pub files: Vec<PathBuf>,
    /// Did the user pass the --fix flag?
    pub fix: bool,
    /// Did the user pass the --fix-only flag?
    pub fix_only: bool,
    /// Names of rules to use. A single string with commas between rule names.
    pub select_rules: String,
    /// Names of rules to ignore. A single string with commas between rule names.
    pub ignore_rules: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to files to lint.
    pub paths: Vec<PathBuf>,
    /// Rules selected by the user and/or recovered from the config file.
    pub rules: RuleSet,
    /// Rules actually run. Equivalent to `rules` except with `--fix-only`,
    /// which drops every rule that has no fix so only the fixers run.
    pub rules_to_apply: RuleSet,
    /// Write the fixed copy of each file next to the original?
    pub write_fixed: bool,
}

pub fn build_config(
    check_config: &ArgsConfig,
    discovered: &[DiscoveredSettings],
    paths: Vec<PathBuf>,
) -> Result<Config> {
    if discovered.len() > 1 {
        todo!("Don't know how to handle multiple TOML")
    }

    let toml_settings = discovered.first().map(|discovery| &discovery.settings);

    let rules_cli = parse_rules_cli(&check_config.select_rules, &check_config.ignore_rules)?;
    let rules_toml = parse_rules_toml(toml_settings)?;
    let rules = reconcile_rules(rules_cli, rules_toml)?;

    // With --fix-only nothing should be reported, so the rules without a fix
    // are dropped entirely rather than just silenced.
    let rules_to_apply = if check_config.fix_only {
        rules.clone().filter(|rule| rule.has_fix())
    } else {
        rules.clone()
    };

    Ok(Config {
        paths,
        rules,
        rules_to_apply,
        write_fixed: check_config.fix || check_config.fix_only,
    })
}

/// Parse CLI rule arguments and return (selected_rules, ignored_rules).
///
/// Returns None for selected_rules if no --select-rules was specified.
/// Returns empty set for ignored_rules if no --ignore-rules was specified.
pub fn parse_rules_cli(
    select_rules: &str,
    ignore_rules: &str,
) -> Result<(Option<HashSet<Rule>>, HashSet<Rule>)> {
    let selected_rules: Option<HashSet<Rule>> = if select_rules.is_empty() {
        None
    } else {
        let passed_by_user = select_rules.split(",").collect::<Vec<&str>>();
        let (rules, invalid_rules) = expand_rule_names(&passed_by_user);
        if !invalid_rules.is_empty() {
            return Err(anyhow::anyhow!(
                "Unknown rules in `--select-rules`: {}",
                invalid_rules.join(", ")
            ));
        }
        Some(rules)
    };

    let ignored_rules: HashSet<Rule> = if ignore_rules.is_empty() {
        HashSet::new()
    } else {
        let passed_by_user = ignore_rules.split(",").collect::<Vec<&str>>();
        let (rules, invalid_rules) = expand_rule_names(&passed_by_user);
        if !invalid_rules.is_empty() {
            return Err(anyhow::anyhow!(
                "Unknown rules in `--ignore-rules`: {}",
                invalid_rules.join(", ")
            ));
        }
        rules
    };

    Ok((selected_rules, ignored_rules))
}

/// Parse TOML configuration and return (selected_rules, ignored_rules).
///
/// Returns None for selected_rules if no TOML select was specified (meaning use all rules).
/// Returns empty set for ignored_rules if no TOML ignore was specified.
pub fn parse_rules_toml(
    toml_settings: Option<&Settings>,
) -> Result<(Option<HashSet<Rule>>, HashSet<Rule>)> {
    let Some(settings) = toml_settings else {
        // No TOML configuration found
        return Ok((None, HashSet::new()));
    };

    let linter_settings = &settings.linter;

    // Handle select rules from TOML
    let selected_rules: Option<HashSet<Rule>> = if let Some(select_rules) = &linter_settings.select
    {
        let passed_by_user: Vec<&str> = select_rules.iter().map(|s| s.as_str()).collect();
        let (rules, invalid_rules) = expand_rule_names(&passed_by_user);
        if !invalid_rules.is_empty() {
            return Err(anyhow::anyhow!(
                "Unknown rules in field `select` in 'gmlint.toml': {}",
                invalid_rules.join(", ")
            ));
        }
        Some(rules)
    } else {
        None
    };

    // Handle ignore rules from TOML
    let ignored_rules: HashSet<Rule> = if let Some(ignore_rules) = &linter_settings.ignore {
        let passed_by_user: Vec<&str> = ignore_rules.iter().map(|s| s.as_str()).collect();
        let (rules, invalid_rules) = expand_rule_names(&passed_by_user);
        if !invalid_rules.is_empty() {
            return Err(anyhow::anyhow!(
                "Unknown rules in field `ignore` in 'gmlint.toml': {}",
                invalid_rules.join(", ")
            ));
        }
        rules
    } else {
        HashSet::new()
    };

    Ok((selected_rules, ignored_rules))
}

// This expands entries that refer to groups (e.g. "CORR", "STYLE") to the
// rules in that group and parses the rest as individual rule names.
//
// Invalid entries are collected, not dropped, so the caller can report all of
// them in one error message.
fn expand_rule_names(rules_passed_by_user: &[&str]) -> (HashSet<Rule>, Vec<String>) {
    let mut rules = HashSet::new();
    let mut invalid_rules = Vec::new();

    for &rule_or_group in rules_passed_by_user {
        let trimmed = rule_or_group.trim();

        if trimmed.is_empty() {
            invalid_rules.push(format!("\"{trimmed}\" (empty or whitespace-only not allowed)"));
            continue;
        }

        if let Ok(category) = trimmed.parse::<Category>() {
            // This is a group name, expand it to all rules in that group
            rules.extend(Rule::by_category(category));
            continue;
        }

        match Rule::from_name(trimmed) {
            Some(rule) => {
                rules.insert(rule);
            }
            None => invalid_rules.push(trimmed.to_string()),
        }
    }

    (rules, invalid_rules)
}

/// Reconcile rules from CLI and TOML configuration.
///
/// Strategy:
/// - CLI select takes precedence over TOML select
/// - CLI ignore and TOML ignore are combined (both applied)
/// - If neither CLI nor TOML specify select, start with all rules
fn reconcile_rules(
    rules_cli: (Option<HashSet<Rule>>, HashSet<Rule>),
    rules_toml: (Option<HashSet<Rule>>, HashSet<Rule>),
) -> Result<RuleSet> {
    let (cli_selected, cli_ignored) = rules_cli;
    let (toml_selected, toml_ignored) = rules_toml;

    // Step 1: Determine base selection (CLI select takes precedence over TOML select)
    let base_selected: HashSet<Rule> = if let Some(cli_selected) = cli_selected {
        // CLI select specified, use it
        cli_selected
    } else if let Some(toml_selected) = toml_selected {
        // No CLI select, but TOML select exists, use TOML
        toml_selected
    } else {
        // Neither CLI nor TOML specified select rules, start with all rules
        HashSet::from_iter(Rule::all().iter().copied())
    };

    // Step 2: Combine all ignore rules (TOML + CLI)
    let all_ignored: HashSet<Rule> = cli_ignored.union(&toml_ignored).copied().collect();

    // Step 3: Apply ignore rules, walking ALL_RULES so the result keeps the
    // declaration order. Rule order is application order.
    let final_rules: RuleSet = ALL_RULES
        .iter()
        .filter(|&rule| base_selected.contains(rule) && !all_ignored.contains(rule))
        .collect();

    Ok(final_rules)
}
