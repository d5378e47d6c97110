//! Built-in rules for the contact form.

use super::error::RuleError;
use super::rules::{FieldRuleConfig, RuleSet, ViolationKind};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

/// Inputs rendered by the contact form, in order.
pub const CONTACT_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_EMAIL, FIELD_MESSAGE];

pub const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
/// Single `@`, no whitespace, dot in the domain part.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Human-readable label for a field. Unknown fields keep their raw name.
pub fn display_name(field_name: &str) -> &str {
    match field_name {
        FIELD_NAME => "Name",
        FIELD_EMAIL => "Email",
        FIELD_MESSAGE => "Message",
        other => other,
    }
}

pub fn contact_field_configs() -> Vec<FieldRuleConfig> {
    vec![
        FieldRuleConfig::new(FIELD_NAME)
            .required()
            .min_length(2)
            .pattern(NAME_PATTERN)
            .message(
                ViolationKind::MinLength,
                "Name must be at least 2 characters long.",
            )
            .message(
                ViolationKind::Pattern,
                "Name should only contain letters and spaces.",
            ),
        FieldRuleConfig::new(FIELD_EMAIL)
            .required()
            .pattern(EMAIL_PATTERN)
            .message(ViolationKind::Pattern, "Please enter a valid email address."),
        FieldRuleConfig::new(FIELD_MESSAGE)
            .required()
            .min_length(10)
            .max_length(1000)
            .message(
                ViolationKind::MinLength,
                "Message must be at least 10 characters long.",
            )
            .message(
                ViolationKind::MaxLength,
                "Message must be less than 1000 characters.",
            ),
    ]
}

pub fn default_contact_rules() -> Result<RuleSet, RuleError> {
    RuleSet::from_config(&contact_field_configs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_compile() {
        let rules = default_contact_rules().unwrap();
        let names: Vec<_> = rules.field_names().collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(rules.iter().all(|(_, rule)| rule.required));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("name"), "Name");
        assert_eq!(display_name("email"), "Email");
        assert_eq!(display_name("message"), "Message");
        assert_eq!(display_name("phone"), "phone");
    }
}
