//! Form field records.

use super::rules;

/// What a field holds, which decides the rules that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Email,
    Message,
}

/// A single form input. The view renders from this record; the record is
/// fed by change events, never read back out of the element tree.
#[derive(Debug, Clone)]
pub struct Field {
    pub role: FieldRole,
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl Field {
    pub fn new(role: FieldRole, id: &'static str, label: &'static str) -> Self {
        Self {
            role,
            id,
            label,
            value: String::new(),
            valid: true,
            error: None,
        }
    }

    /// Run this field's rules in order, keeping the first failure only.
    /// The error slot is cleared up front, so revalidating an unchanged
    /// value lands on the same single error.
    pub fn validate(&mut self) -> bool {
        self.error = None;

        if !rules::present(&self.value) {
            return self.fail(rules::REQUIRED_MESSAGE);
        }
        if self.role == FieldRole::Email && !rules::email_shape(&self.value) {
            return self.fail(rules::EMAIL_MESSAGE);
        }
        if self.role == FieldRole::Message && !rules::long_enough(&self.value) {
            return self.fail(rules::MESSAGE_LENGTH_MESSAGE);
        }

        self.valid = true;
        true
    }

    fn fail(&mut self, message: &str) -> bool {
        self.error = Some(message.to_string());
        self.valid = false;
        false
    }

    /// Edit trigger: take the new value, revalidating only while errored.
    pub fn edited(&mut self, value: String) {
        self.value = value;
        if self.error.is_some() {
            self.validate();
        }
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.valid = true;
        self.error = None;
    }
}
