//! Form state owned by [`crate::OrderForm`]
//!
//! - [`FormState`]: raw field values as the user entered them
//! - [`ErrorState`]: per-field inline error messages
//! - [`SubmissionStatus`]: the success/failure banner

use crate::validation::FieldError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Form field identifier
///
/// Names match the input element ids and the JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Customer full name
    FullName,
    /// Pizza size
    Size,
    /// Topping selection
    Toppings,
}

impl Field {
    /// Input id / JSON key
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
            Self::Toppings => "toppings",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = crate::error::ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(Self::FullName),
            "size" => Ok(Self::Size),
            "toppings" => Ok(Self::Toppings),
            other => Err(crate::error::ChangeError::UnknownField(other.to_string())),
        }
    }
}

/// Raw form values
///
/// Values are kept exactly as entered so that invalid input can be shown
/// back to the user; [`crate::validation::validate_order`] turns a state
/// into a typed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    /// Full name text
    pub full_name: String,
    /// Selected size code, empty when nothing is chosen
    pub size: String,
    /// Checked topping ids in the order they were checked
    pub toppings: IndexSet<String>,
}

impl FormState {
    /// Empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With full name
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// With size code
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// With toppings (duplicates collapse)
    #[must_use]
    pub fn with_toppings<I, S>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.toppings = toppings.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the given topping id is checked
    #[inline]
    #[must_use]
    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.contains(id)
    }

    /// Whether every field is at its initial empty value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty() && self.toppings.is_empty()
    }
}

/// Inline validation errors
///
/// Only the scalar fields carry inline errors; topping problems surface at
/// whole-form level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    full_name: Option<FieldError>,
    size: Option<FieldError>,
}

impl ErrorState {
    /// Error currently stored for a field
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::FullName => self.full_name.as_ref(),
            Field::Size => self.size.as_ref(),
            Field::Toppings => None,
        }
    }

    /// Message to render under a field, empty when there is no error
    #[must_use]
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    /// Whether no field has an error
    #[inline]
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.full_name.is_none() && self.size.is_none()
    }

    pub(crate) fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::FullName => self.full_name = error,
            Field::Size => self.size = error,
            Field::Toppings => {}
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Banner shown after a submission
///
/// Success and failure can never both be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Confirmation message from the server
    Success(String),
    /// Failure message for the user
    Failure(String),
}

impl SubmissionStatus {
    /// Success banner text, empty unless the last submission succeeded
    #[must_use]
    pub fn success_message(&self) -> &str {
        match self {
            Self::Success(msg) => msg,
            _ => "",
        }
    }

    /// Failure banner text, empty unless the last submission failed
    #[must_use]
    pub fn failure_message(&self) -> &str {
        match self {
            Self::Failure(msg) => msg,
            _ => "",
        }
    }
}
