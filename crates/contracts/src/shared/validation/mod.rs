//! Declarative form validation.
//!
//! A [`RuleSet`] maps field names to [`FieldRule`]s. [`evaluate`] checks one
//! field, [`validate_form`] checks every field of the rule set and returns a
//! [`FormReport`] so that all errors can be rendered at once.

pub mod defaults;
pub mod error;
pub mod evaluator;
pub mod presenter;
pub mod rules;

pub use defaults::{contact_field_configs, default_contact_rules, display_name};
pub use error::RuleError;
pub use evaluator::{evaluate, evaluate_rule, is_form_valid, validate_form, FieldOutcome, FieldValues, FormReport};
pub use presenter::ErrorPresenter;
pub use rules::{FieldMessages, FieldRule, FieldRuleConfig, RuleSet, ValidationResult, ViolationKind};
