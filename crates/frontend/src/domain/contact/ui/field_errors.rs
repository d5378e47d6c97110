use std::collections::HashMap;

use contracts::shared::validation::ErrorPresenter;
use leptos::prelude::*;

/// Inline error messages of the contact form, keyed by field name.
///
/// Each input reads its own entry through [`FieldErrors::error_for`] and
/// renders it under the field.
#[derive(Clone, Copy)]
pub struct FieldErrors {
    errors: RwSignal<HashMap<String, String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(HashMap::new()),
        }
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|map| map.get(field).cloned()))
    }

    pub fn has_errors(&self) -> bool {
        self.errors.with(|map| !map.is_empty())
    }
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPresenter for FieldErrors {
    fn show_error(&mut self, field: &str, message: &str) {
        let unchanged = self
            .errors
            .with_untracked(|map| map.get(field).map(String::as_str) == Some(message));
        if !unchanged {
            self.errors.update(|map| {
                map.insert(field.to_string(), message.to_string());
            });
        }
    }

    fn clear_error(&mut self, field: &str) {
        // Only notify when something was actually shown
        if self.errors.with_untracked(|map| map.contains_key(field)) {
            self.errors.update(|map| {
                map.remove(field);
            });
        }
    }
}
