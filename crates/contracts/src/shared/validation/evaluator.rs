//! Rule evaluator — pure logic, no DOM access.

use std::collections::{BTreeMap, HashMap};

use super::rules::{FieldRule, RuleSet, ValidationResult, ViolationKind};

/// Source of raw field values for [`validate_form`].
pub trait FieldValues {
    fn value(&self, field_name: &str) -> Option<&str>;
}

impl FieldValues for HashMap<String, String> {
    fn value(&self, field_name: &str) -> Option<&str> {
        self.get(field_name).map(String::as_str)
    }
}

impl FieldValues for HashMap<&str, &str> {
    fn value(&self, field_name: &str) -> Option<&str> {
        self.get(field_name).copied()
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, field_name: &str) -> Option<&str> {
        self.get(field_name).map(String::as_str)
    }
}

impl FieldValues for [(&str, &str)] {
    fn value(&self, field_name: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == field_name)
            .map(|(_, value)| *value)
    }
}

/// Validate one field. Fields without a rule are always valid.
pub fn evaluate(field_name: &str, raw_value: &str, rules: &RuleSet) -> ValidationResult {
    match rules.get(field_name) {
        Some(rule) => evaluate_rule(rule, raw_value),
        None => ValidationResult::Valid,
    }
}

/// Checks run in a fixed order (required, min, max, pattern); the first
/// violation is returned.
pub fn evaluate_rule(rule: &FieldRule, raw_value: &str) -> ValidationResult {
    let value = raw_value.trim();

    if value.is_empty() {
        return if rule.required {
            rule.violation(ViolationKind::Required)
        } else {
            ValidationResult::Valid
        };
    }

    // Characters, not bytes
    let length = value.chars().count();

    if let Some(min) = rule.min_length {
        if length < min {
            return rule.violation(ViolationKind::MinLength);
        }
    }

    if let Some(max) = rule.max_length {
        if length > max {
            return rule.violation(ViolationKind::MaxLength);
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return rule.violation(ViolationKind::Pattern);
        }
    }

    ValidationResult::Valid
}

/// Result for one field of a [`FormReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: String,
    pub result: ValidationResult,
}

/// Per-field results for a whole form, in rule-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    outcomes: Vec<FieldOutcome>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_valid())
    }

    pub fn get(&self, field_name: &str) -> Option<&ValidationResult> {
        self.outcomes
            .iter()
            .find(|o| o.field == field_name)
            .map(|o| &o.result)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter()
    }

    /// `(field, message)` for every invalid field.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| {
            o.result
                .message()
                .map(|message| (o.field.as_str(), message))
        })
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Validate every field of `rules` against `values`.
///
/// All fields are evaluated, even after a violation, so the caller can
/// render every error in one pass. A field missing from `values` is treated
/// as empty.
pub fn validate_form<V>(values: &V, rules: &RuleSet) -> FormReport
where
    V: FieldValues + ?Sized,
{
    let outcomes = rules
        .iter()
        .map(|(name, rule)| FieldOutcome {
            field: name.to_string(),
            result: evaluate_rule(rule, values.value(name).unwrap_or_default()),
        })
        .collect();

    FormReport { outcomes }
}

pub fn is_form_valid<V>(values: &V, rules: &RuleSet) -> bool
where
    V: FieldValues + ?Sized,
{
    validate_form(values, rules).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::default_contact_rules;

    fn rules() -> RuleSet {
        default_contact_rules().unwrap()
    }

    fn kind_of(field: &str, value: &str) -> Option<ViolationKind> {
        evaluate(field, value, &rules()).kind()
    }

    #[test]
    fn test_unknown_field_is_valid() {
        let rules = rules();
        assert_eq!(evaluate("phone", "", &rules), ValidationResult::Valid);
        assert_eq!(evaluate("phone", "anything at all", &rules), ValidationResult::Valid);
        assert_eq!(evaluate("", "   ", &rules), ValidationResult::Valid);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(kind_of("name", ""), Some(ViolationKind::Required));
        assert_eq!(kind_of("name", "A"), Some(ViolationKind::MinLength));
        assert_eq!(kind_of("name", "Jo3l"), Some(ViolationKind::Pattern));
        assert_eq!(kind_of("name", "Jo El"), None);
    }

    #[test]
    fn test_name_messages() {
        let rules = rules();
        assert_eq!(
            evaluate("name", "", &rules).message(),
            Some("Name is required.")
        );
        assert_eq!(
            evaluate("name", "A", &rules).message(),
            Some("Name must be at least 2 characters long.")
        );
        assert_eq!(
            evaluate("name", "Jo3l", &rules).message(),
            Some("Name should only contain letters and spaces.")
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(kind_of("email", "not-an-email"), Some(ViolationKind::Pattern));
        assert_eq!(kind_of("email", "a@b.co"), None);
        assert_eq!(kind_of("email", ""), Some(ViolationKind::Required));
        assert_eq!(kind_of("email", "a@@b.co"), Some(ViolationKind::Pattern));
        assert_eq!(kind_of("email", "a b@c.de"), Some(ViolationKind::Pattern));
        assert_eq!(kind_of("email", "a@bco"), Some(ViolationKind::Pattern));
    }

    #[test]
    fn test_email_message() {
        assert_eq!(
            evaluate("email", "nope", &rules()).message(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_message_length_bounds() {
        assert_eq!(kind_of("message", &"x".repeat(9)), Some(ViolationKind::MinLength));
        assert_eq!(kind_of("message", &"x".repeat(10)), None);
        assert_eq!(kind_of("message", &"x".repeat(1000)), None);
        assert_eq!(kind_of("message", &"x".repeat(1001)), Some(ViolationKind::MaxLength));
    }

    #[test]
    fn test_message_max_length_text() {
        assert_eq!(
            evaluate("message", &"x".repeat(1001), &rules()).message(),
            Some("Message must be less than 1000 characters.")
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 10 two-byte characters
        assert_eq!(kind_of("message", &"é".repeat(10)), None);
        assert_eq!(kind_of("message", &"é".repeat(9)), Some(ViolationKind::MinLength));
    }

    #[test]
    fn test_value_is_trimmed_before_checks() {
        assert_eq!(kind_of("name", "   "), Some(ViolationKind::Required));
        assert_eq!(kind_of("email", "\t\n "), Some(ViolationKind::Required));
        assert_eq!(kind_of("message", "     "), Some(ViolationKind::Required));
        // Padding does not count toward the minimum
        assert_eq!(kind_of("name", "  A  "), Some(ViolationKind::MinLength));
        assert_eq!(kind_of("email", "  a@b.co  "), None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let rules = rules();
        for (field, value) in [("name", "Jo3l"), ("email", "a@b.co"), ("message", "short")] {
            assert_eq!(evaluate(field, value, &rules), evaluate(field, value, &rules));
        }
    }

    #[test]
    fn test_optional_field_skips_checks_when_empty() {
        let rules = RuleSet::from_config(&[crate::shared::validation::FieldRuleConfig::new(
            "website",
        )
        .min_length(5)
        .pattern("^https?://")])
        .unwrap();

        assert_eq!(evaluate("website", "", &rules), ValidationResult::Valid);
        assert_eq!(evaluate("website", "  ", &rules), ValidationResult::Valid);
        assert_eq!(
            evaluate("website", "ftp://x", &rules).kind(),
            Some(ViolationKind::Pattern)
        );
    }

    #[test]
    fn test_validate_form_reports_every_field() {
        let values = HashMap::from([("name", ""), ("email", "bad"), ("message", "short")]);
        let report = validate_form(&values, &rules());

        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.get("name").and_then(|r| r.kind()), Some(ViolationKind::Required));
        assert_eq!(report.get("email").and_then(|r| r.kind()), Some(ViolationKind::Pattern));
        assert_eq!(
            report.get("message").and_then(|r| r.kind()),
            Some(ViolationKind::MinLength)
        );
    }

    #[test]
    fn test_validate_form_valid() {
        let values: HashMap<String, String> = HashMap::from([
            ("name".to_string(), "Jo El".to_string()),
            ("email".to_string(), "a@b.co".to_string()),
            ("message".to_string(), "Hello there, friend".to_string()),
        ]);
        let report = validate_form(&values, &rules());
        assert!(report.is_valid());
        assert_eq!(report.len(), 3);
        assert!(is_form_valid(&values, &rules()));
    }

    #[test]
    fn test_validate_form_missing_field_counts_as_empty() {
        let values = HashMap::from([("name", "Jo El"), ("email", "a@b.co")]);
        let report = validate_form(&values, &rules());
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors, vec![("message", "Message is required.")]);
    }

    #[test]
    fn test_validate_form_ignores_extra_values() {
        let values: &[(&str, &str)] = &[
            ("name", "Jo El"),
            ("email", "a@b.co"),
            ("message", "Hello there, friend"),
            ("honeypot", "spam"),
        ];
        let report = validate_form(values, &rules());
        assert!(report.is_valid());
        assert!(report.get("honeypot").is_none());
    }

    #[test]
    fn test_errors_follow_rule_set_order() {
        let values = BTreeMap::from([
            ("message".to_string(), String::new()),
            ("email".to_string(), String::new()),
            ("name".to_string(), String::new()),
        ]);
        let report = validate_form(&values, &rules());
        let fields: Vec<_> = report.errors().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }
}
