//! Message form field state and the submit/validate transitions.
//!
//! DESIGN
//! ======
//! Each required field tracks its own value and inline error. Validation
//! touches every field before the aggregate result is computed, so all
//! errors show at once.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validate::{is_valid_input, trim_input};

pub const AUTHOR_REQUIRED: &str = "El nombre es obligatorio";
pub const BODY_REQUIRED: &str = "El mensaje es obligatorio";

/// One required text input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldState {
    /// Whether the field carries the visual error marker.
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Store new content and drop any error, without re-validating.
    pub fn edit(&mut self, value: String) {
        self.value = value;
        self.error = None;
    }

    fn validate(&mut self, message: &'static str) -> bool {
        let valid = is_valid_input(&self.value);
        self.error = if valid { None } else { Some(message) };
        valid
    }

    fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Identifies a required field of the message form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Author,
    Body,
}

/// Trimmed values accepted by a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub author: String,
    pub body: String,
}

/// Display model for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub error_text: &'static str,
    pub invalid: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageFormState {
    pub author: FieldState,
    pub body: FieldState,
}

impl MessageFormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Author => &self.author,
            Field::Body => &self.body,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Author => &mut self.author,
            Field::Body => &mut self.body,
        }
    }

    /// Input-event handler: new content clears that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.field_mut(field).edit(value);
    }

    /// Validate all required fields. Every field gets its error set or
    /// cleared; the result is true only when all are valid.
    pub fn validate(&mut self) -> bool {
        let author_ok = self.author.validate(AUTHOR_REQUIRED);
        let body_ok = self.body.validate(BODY_REQUIRED);
        author_ok && body_ok
    }

    /// Submit handler. On success returns the trimmed values and resets the
    /// form; on failure keeps the entered values and returns `None`.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.validate() {
            return None;
        }
        let submission = Submission {
            author: trim_input(&self.author.value).to_owned(),
            body: trim_input(&self.body.value).to_owned(),
        };
        self.reset();
        Some(submission)
    }

    pub fn reset(&mut self) {
        self.author.reset();
        self.body.reset();
    }

    pub fn view(&self, field: Field) -> FieldView {
        let state = self.field(field);
        FieldView {
            value: state.value.clone(),
            error_text: state.error.unwrap_or_default(),
            invalid: state.is_invalid(),
        }
    }
}
