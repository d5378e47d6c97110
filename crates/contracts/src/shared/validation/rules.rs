use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::RuleError;

// ============================================================================
// Violation kinds and results
// ============================================================================

/// Which constraint of a field rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Required => "required",
            ViolationKind::MinLength => "min_length",
            ViolationKind::MaxLength => "max_length",
            ViolationKind::Pattern => "pattern",
        }
    }
}

/// Outcome of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        kind: ViolationKind,
        message: String,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message, .. } => Some(message.as_str()),
        }
    }
}

// ============================================================================
// Field rule
// ============================================================================

/// Display strings per violation kind. Missing entries fall back to a
/// generic message built from the field's display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMessages {
    pub required: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
}

impl FieldMessages {
    pub fn get(&self, kind: ViolationKind) -> Option<&str> {
        match kind {
            ViolationKind::Required => self.required.as_deref(),
            ViolationKind::MinLength => self.min_length.as_deref(),
            ViolationKind::MaxLength => self.max_length.as_deref(),
            ViolationKind::Pattern => self.pattern.as_deref(),
        }
    }

    pub fn set(&mut self, kind: ViolationKind, message: String) {
        let slot = match kind {
            ViolationKind::Required => &mut self.required,
            ViolationKind::MinLength => &mut self.min_length,
            ViolationKind::MaxLength => &mut self.max_length,
            ViolationKind::Pattern => &mut self.pattern,
        };
        *slot = Some(message);
    }
}

/// Compiled constraints for one form field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub display_name: String,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub messages: FieldMessages,
}

impl FieldRule {
    /// Message shown for `kind`, configured or generic.
    pub fn message_for(&self, kind: ViolationKind) -> String {
        if let Some(message) = self.messages.get(kind) {
            return message.to_string();
        }

        let name = &self.display_name;
        match kind {
            ViolationKind::Required => format!("{name} is required."),
            ViolationKind::MinLength => format!(
                "{name} must be at least {} characters long.",
                self.min_length.unwrap_or_default()
            ),
            ViolationKind::MaxLength => format!(
                "{name} must be at most {} characters long.",
                self.max_length.unwrap_or_default()
            ),
            ViolationKind::Pattern => format!("{name} has an invalid format."),
        }
    }

    pub fn violation(&self, kind: ViolationKind) -> ValidationResult {
        ValidationResult::Invalid {
            kind,
            message: self.message_for(kind),
        }
    }
}

/// Declarative, serializable form of a [`FieldRule`].
///
/// Doubles as a builder:
///
/// ```
/// use contracts::shared::validation::{FieldRuleConfig, RuleSet};
///
/// let rules = RuleSet::from_config(&[
///     FieldRuleConfig::new("phone").required().pattern(r"^\+?[0-9 ]+$"),
/// ])
/// .unwrap();
/// assert!(rules.get("phone").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRuleConfig {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub messages: FieldMessages,
}

impl FieldRuleConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn message(mut self, kind: ViolationKind, message: impl Into<String>) -> Self {
        self.messages.set(kind, message.into());
        self
    }

    pub fn compile(&self) -> Result<FieldRule, RuleError> {
        if self.name.trim().is_empty() {
            return Err(RuleError::EmptyFieldName);
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(RuleError::InvertedLength {
                    field: self.name.clone(),
                    min,
                    max,
                });
            }
        }

        let pattern = self
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|source| RuleError::InvalidPattern {
                field: self.name.clone(),
                source,
            })?;

        Ok(FieldRule {
            display_name: self
                .display_name
                .clone()
                .unwrap_or_else(|| super::defaults::display_name(&self.name).to_string()),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            messages: self.messages.clone(),
        })
    }
}

// ============================================================================
// Rule set
// ============================================================================

/// Immutable mapping field name -> rule, in declaration order.
///
/// Cloning is cheap; clones share the compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Arc<Vec<(String, FieldRule)>>,
}

impl RuleSet {
    pub fn from_config(configs: &[FieldRuleConfig]) -> Result<Self, RuleError> {
        let mut fields: Vec<(String, FieldRule)> = Vec::with_capacity(configs.len());

        for config in configs {
            if fields.iter().any(|(name, _)| *name == config.name) {
                return Err(RuleError::DuplicateField(config.name.clone()));
            }
            fields.push((config.name.clone(), config.compile()?));
        }

        Ok(Self {
            fields: Arc::new(fields),
        })
    }

    pub fn get(&self, field_name: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.get(field_name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
