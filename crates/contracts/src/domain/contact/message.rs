use serde::{Deserialize, Serialize};

use crate::shared::validation::defaults::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use crate::shared::validation::FieldValues;

/// Values collected by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

impl FieldValues for ContactMessage {
    fn value(&self, field_name: &str) -> Option<&str> {
        match field_name {
            FIELD_NAME => Some(self.name.as_str()),
            FIELD_EMAIL => Some(self.email.as_str()),
            FIELD_MESSAGE => Some(self.message.as_str()),
            _ => None,
        }
    }
}
