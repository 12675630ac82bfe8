//! Identifier rename rules with word-boundary matching.

use crate::error::{RenameError, Result};
use regex::{NoExpand, Regex};

/// Identifier characters for boundary purposes: letters, digits, underscore.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn check_identifier(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(RenameError::InvalidConfig(format!(
            "'{name}' is not a valid identifier"
        )));
    }
    Ok(())
}

/// A single identifier rename applied to whole words only.
pub struct RenameRule {
    kind: RuleKind,
}

enum RuleKind {
    Simple {
        name: String,
        pattern: Regex,
        replacement: String,
    },
    Guarded {
        name: String,
        pattern: Regex,
        replacement: String,
        forbidden_suffix: String,
    },
}

impl RenameRule {
    /// Creates a rename that replaces every standalone occurrence of `name`.
    ///
    /// A match is a maximal run of identifier characters exactly equal to
    /// `name`; occurrences inside longer identifiers are left alone.
    pub fn simple(name: &str, replacement: &str) -> Result<Self> {
        check_identifier(name)?;
        check_identifier(replacement)?;
        Ok(Self {
            kind: RuleKind::Simple {
                name: name.to_string(),
                pattern: Regex::new(&format!(r"\b{}\b", regex::escape(name)))?,
                replacement: replacement.to_string(),
            },
        })
    }

    /// Creates a rename that skips occurrences of `name` immediately
    /// followed by `forbidden_suffix`.
    ///
    /// The suffix check is case-sensitive and applies in addition to the
    /// whole-word boundaries, so `guarded("condition", "ifCondition", "Type")`
    /// rewrites `row.condition` but leaves `conditionType` alone.
    pub fn guarded(name: &str, replacement: &str, forbidden_suffix: &str) -> Result<Self> {
        check_identifier(name)?;
        check_identifier(replacement)?;
        check_identifier(forbidden_suffix)?;
        Ok(Self {
            kind: RuleKind::Guarded {
                name: name.to_string(),
                // Left boundary only; the right boundary and the suffix are
                // checked per candidate in apply().
                pattern: Regex::new(&format!(r"\b{}", regex::escape(name)))?,
                replacement: replacement.to_string(),
                forbidden_suffix: forbidden_suffix.to_string(),
            },
        })
    }

    /// The identifier this rule matches.
    pub fn name(&self) -> &str {
        match &self.kind {
            RuleKind::Simple { name, .. } | RuleKind::Guarded { name, .. } => name,
        }
    }

    /// The identifier this rule substitutes.
    pub fn replacement(&self) -> &str {
        match &self.kind {
            RuleKind::Simple { replacement, .. } | RuleKind::Guarded { replacement, .. } => {
                replacement
            }
        }
    }

    /// Applies the rename to the entire input and returns the result.
    pub fn apply(&self, source: &str) -> String {
        match &self.kind {
            RuleKind::Simple {
                pattern,
                replacement,
                ..
            } => pattern
                .replace_all(source, NoExpand(replacement.as_str()))
                .into_owned(),
            RuleKind::Guarded {
                pattern,
                replacement,
                forbidden_suffix,
                ..
            } => {
                let mut out = String::with_capacity(source.len());
                let mut last = 0;
                for m in pattern.find_iter(source) {
                    let rest = &source[m.end()..];
                    // Both must hold: the candidate ends at an identifier
                    // boundary, and the forbidden suffix does not follow.
                    let whole_word = rest.chars().next().is_none_or(|c| !is_ident_char(c));
                    if whole_word && !rest.starts_with(forbidden_suffix.as_str()) {
                        out.push_str(&source[last..m.start()]);
                        out.push_str(replacement);
                        last = m.end();
                    }
                }
                out.push_str(&source[last..]);
                out
            }
        }
    }

    /// Returns a mapping-table line for console output.
    pub fn describe(&self) -> String {
        match &self.kind {
            RuleKind::Simple {
                name, replacement, ..
            } => format!("{name} -> {replacement}"),
            RuleKind::Guarded {
                name,
                replacement,
                forbidden_suffix,
                ..
            } => format!("{name} -> {replacement} (preserving {name}{forbidden_suffix})"),
        }
    }
}

/// An ordered collection of rename rules.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<RenameRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the end of the set.
    pub fn rule(mut self, rule: RenameRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The built-in mapping of legacy property names to their replacements.
    pub fn default_renames() -> Self {
        let simple = [
            ("isTrueBranch", "branchFlag"),
            ("paramDesc", "description"),
            ("moduleDesc", "userComments"),
            ("standardMH", "standardMh"),
        ];
        let mut set = RuleSet::new();
        for (name, replacement) in simple {
            set = set.rule(RenameRule::simple(name, replacement).expect("default rule is valid"));
        }
        set.rule(
            RenameRule::guarded("condition", "ifCondition", "Type")
                .expect("default rule is valid"),
        )
    }

    /// Applies every rule, in order, to the entire input.
    pub fn apply(&self, source: &str) -> String {
        let mut result = source.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }

    /// Rejects a set in which some rule's replacement is itself the match
    /// pattern of any rule. Disjointness is what makes a second run over
    /// already-rewritten files a no-op.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            if let Some(clash) = self.rules.iter().find(|r| r.name() == rule.replacement()) {
                return Err(RenameError::InvalidConfig(format!(
                    "replacement '{}' of rule '{}' is also the match pattern of rule '{}'",
                    rule.replacement(),
                    rule.name(),
                    clash.name(),
                )));
            }
        }
        Ok(())
    }

    /// Returns mapping-table lines for all rules.
    pub fn describe(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.describe()).collect()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replaces_whole_words_only() {
        let rule = RenameRule::simple("isTrueBranch", "branchFlag").unwrap();
        let input = "const isTrueBranch = true; const notIsTrueBranchX = 1;";
        assert_eq!(
            rule.apply(input),
            "const branchFlag = true; const notIsTrueBranchX = 1;"
        );
    }

    #[test]
    fn test_simple_ignores_longer_identifiers() {
        let rule = RenameRule::simple("paramDesc", "description").unwrap();
        assert_eq!(rule.apply("paramDescription"), "paramDescription");
        assert_eq!(rule.apply("myParamDesc"), "myParamDesc");
        assert_eq!(rule.apply("param_desc"), "param_desc");
    }

    #[test]
    fn test_simple_is_case_sensitive() {
        let rule = RenameRule::simple("standardMH", "standardMh").unwrap();
        assert_eq!(rule.apply("standardmh standardMH"), "standardmh standardMh");
    }

    #[test]
    fn test_guarded_preserves_forbidden_suffix() {
        let rule = RenameRule::guarded("condition", "ifCondition", "Type").unwrap();
        let input = "row.condition = x; const conditionType = 'foo';";
        assert_eq!(
            rule.apply(input),
            "row.ifCondition = x; const conditionType = 'foo';"
        );
    }

    #[test]
    fn test_guarded_respects_left_boundary() {
        let rule = RenameRule::guarded("condition", "ifCondition", "Type").unwrap();
        assert_eq!(rule.apply("myCondition"), "myCondition");
        assert_eq!(rule.apply("precondition"), "precondition");
    }

    #[test]
    fn test_guarded_replaces_multiple_occurrences() {
        let rule = RenameRule::guarded("condition", "ifCondition", "Type").unwrap();
        assert_eq!(
            rule.apply("condition && conditionType && condition"),
            "ifCondition && conditionType && ifCondition"
        );
    }

    #[test]
    fn test_rule_set_applies_in_order() {
        let set = RuleSet::default_renames();
        let input = "{isTrueBranch: true, paramDesc: 'x', moduleDesc: 'y', standardMH: 1, condition: a, conditionType: 'b'}";
        assert_eq!(
            set.apply(input),
            "{branchFlag: true, description: 'x', userComments: 'y', standardMh: 1, ifCondition: a, conditionType: 'b'}"
        );
    }

    #[test]
    fn test_rule_set_is_idempotent() {
        let set = RuleSet::default_renames();
        let input = "paramDesc condition conditionType standardMH plainText";
        let once = set.apply(input);
        assert_eq!(set.apply(&once), once);
    }

    #[test]
    fn test_default_renames_validate() {
        assert!(RuleSet::default_renames().validate().is_ok());
        assert_eq!(RuleSet::default_renames().len(), 5);
    }

    #[test]
    fn test_validate_rejects_replacement_that_is_a_pattern() {
        let set = RuleSet::new()
            .rule(RenameRule::simple("alpha", "beta").unwrap())
            .rule(RenameRule::simple("beta", "gamma").unwrap());
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_rejects_non_identifier_pattern() {
        assert!(RenameRule::simple("foo bar", "baz").is_err());
        assert!(RenameRule::simple("", "baz").is_err());
        assert!(RenameRule::guarded("condition", "ifCondition", "-").is_err());
    }

    #[test]
    fn test_describe_lines() {
        let set = RuleSet::default_renames();
        let lines = set.describe();
        assert_eq!(lines[0], "isTrueBranch -> branchFlag");
        assert_eq!(
            lines[4],
            "condition -> ifCondition (preserving conditionType)"
        );
    }
}
