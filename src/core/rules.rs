//! Project rules model and merge-with-defaults parsing.
//!
//! Rules are a best-effort governance signal, not a schema-validated
//! artifact: the raw document is forwarded verbatim to the AI provider as
//! generation context, and only the `branch_check` section is interpreted
//! by the tool itself. Parsing therefore degrades field-by-field to
//! defaults instead of failing.

use serde_yml::Value;
use tracing::warn;

/// Raw context used when no rules file exists.
pub const NO_RULES_SENTINEL: &str = "No local rules found. Using defaults.";

/// Branch-protection policy extracted from `rules.branch_check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCheck {
    /// Whether the branch gate runs at all.
    pub enabled: bool,
    /// Branches on which direct code generation is disallowed.
    pub protected_branches: Vec<String>,
    /// Allowed branch-type prefixes for the `type/name` escape hatch.
    pub prefixes: Vec<String>,
}

impl Default for BranchCheck {
    fn default() -> Self {
        Self {
            enabled: false,
            protected_branches: vec!["main".to_string(), "master".to_string()],
            prefixes: vec![
                "feature".to_string(),
                "bugfix".to_string(),
                "refactor".to_string(),
                "hotfix".to_string(),
            ],
        }
    }
}

/// Parsed governance rules for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rules {
    /// Verbatim rules document (or [`NO_RULES_SENTINEL`]), passed to the
    /// provider as free-form context. Never re-serialized.
    pub raw_text: String,
    pub branch_check: BranchCheck,
}

/// Parse a rules document. Never fails: unparseable or partially valid
/// input degrades to defaults, keeping `raw_text` verbatim.
pub fn parse_rules(raw: &str) -> Rules {
    let branch_check = match serde_yml::from_str::<Value>(raw) {
        Ok(doc) => parse_branch_check(doc.get("rules").and_then(|r| r.get("branch_check"))),
        Err(err) => {
            warn!(%err, "rules file is not valid YAML, using default policy");
            BranchCheck::default()
        }
    };
    Rules {
        raw_text: raw.to_string(),
        branch_check,
    }
}

fn parse_branch_check(value: Option<&Value>) -> BranchCheck {
    let mut check = BranchCheck::default();
    match value {
        None => check,
        // Boolean shorthand toggles `enabled` only.
        Some(Value::Bool(enabled)) => {
            check.enabled = *enabled;
            check
        }
        Some(mapping @ Value::Mapping(_)) => {
            check.enabled = mapping
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if let Some(branches) = string_list(mapping.get("protected_branches")) {
                check.protected_branches = branches;
            }
            if let Some(prefixes) = string_list(mapping.get("prefixes")) {
                check.prefixes = prefixes;
            }
            check
        }
        Some(other) => {
            warn!(
                "branch_check has unexpected type (expected bool or mapping, got {}), using defaults",
                type_name(other)
            );
            check
        }
    }
}

/// Extract a list of strings, or `None` to keep the default.
///
/// A present-but-not-a-list value, or a list containing non-string
/// items, is a malformed-input condition and is reported before falling
/// back.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None => None,
        Some(Value::Sequence(items)) => {
            let strings: Vec<String> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            if strings.len() != items.len() {
                warn!("branch_check list field contains non-string items, using default");
                return None;
            }
            Some(strings)
        }
        Some(other) => {
            warn!(
                "branch_check list field has unexpected type {}, using default",
                type_name(other)
            );
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let rules = parse_rules("");
        assert_eq!(rules.branch_check, BranchCheck::default());
        assert!(!rules.branch_check.enabled);
        assert_eq!(rules.raw_text, "");
    }

    #[test]
    fn invalid_yaml_yields_defaults_and_keeps_raw_text() {
        let raw = "rules: [unclosed";
        let rules = parse_rules(raw);
        assert_eq!(rules.branch_check, BranchCheck::default());
        assert_eq!(rules.raw_text, raw);
    }

    #[test]
    fn missing_branch_check_yields_defaults() {
        let rules = parse_rules("rules:\n  tdd: true\n");
        assert_eq!(rules.branch_check, BranchCheck::default());
    }

    #[test]
    fn boolean_shorthand_toggles_enabled_only() {
        let rules = parse_rules("rules:\n  branch_check: true\n");
        assert!(rules.branch_check.enabled);
        assert_eq!(
            rules.branch_check.protected_branches,
            BranchCheck::default().protected_branches
        );
        assert_eq!(rules.branch_check.prefixes, BranchCheck::default().prefixes);

        let rules = parse_rules("rules:\n  branch_check: false\n");
        assert!(!rules.branch_check.enabled);
    }

    #[test]
    fn mapping_overrides_fields_individually() {
        let raw = "rules:\n  branch_check:\n    enabled: true\n    protected_branches: [main]\n";
        let rules = parse_rules(raw);
        assert!(rules.branch_check.enabled);
        assert_eq!(rules.branch_check.protected_branches, vec!["main"]);
        // prefixes untouched keeps its default
        assert_eq!(rules.branch_check.prefixes, BranchCheck::default().prefixes);
    }

    #[test]
    fn mapping_without_enabled_defaults_to_disabled() {
        let raw = "rules:\n  branch_check:\n    prefixes: [feature]\n";
        let rules = parse_rules(raw);
        assert!(!rules.branch_check.enabled);
        assert_eq!(rules.branch_check.prefixes, vec!["feature"]);
    }

    #[test]
    fn scalar_branch_check_falls_back_entirely() {
        let rules = parse_rules("rules:\n  branch_check: sometimes\n");
        assert_eq!(rules.branch_check, BranchCheck::default());

        let rules = parse_rules("rules:\n  branch_check: 3\n");
        assert_eq!(rules.branch_check, BranchCheck::default());
    }

    #[test]
    fn non_list_list_field_keeps_default() {
        let raw = "rules:\n  branch_check:\n    enabled: true\n    protected_branches: main\n";
        let rules = parse_rules(raw);
        assert!(rules.branch_check.enabled);
        assert_eq!(
            rules.branch_check.protected_branches,
            BranchCheck::default().protected_branches
        );
    }

    #[test]
    fn list_with_non_string_items_keeps_default() {
        let raw = "rules:\n  branch_check:\n    enabled: true\n    protected_branches: [1, 2]\n";
        let rules = parse_rules(raw);
        assert!(rules.branch_check.enabled);
        assert_eq!(
            rules.branch_check.protected_branches,
            BranchCheck::default().protected_branches
        );
        assert!(!rules.branch_check.protected_branches.is_empty());
    }

    #[test]
    fn list_fields_are_never_empty_by_default() {
        for raw in ["", "rules: 7\n", "not yaml: [", "rules:\n  branch_check: {}\n"] {
            let rules = parse_rules(raw);
            assert!(!rules.branch_check.protected_branches.is_empty(), "{raw:?}");
            assert!(!rules.branch_check.prefixes.is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn raw_text_is_verbatim_regardless_of_parse_result() {
        let raw = "rules:\n  branch_check: 42\n  docs: auto\n";
        let rules = parse_rules(raw);
        assert_eq!(rules.raw_text, raw);
    }
}
