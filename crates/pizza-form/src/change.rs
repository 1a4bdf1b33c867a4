//! User edits
//!
//! [`FieldChange`] is the typed edit applied by [`crate::OrderForm`].
//! [`InputEvent`] is the raw event a rendering surface emits (input id,
//! value, checked flag) and converts into a [`FieldChange`].

use crate::error::ChangeError;
use crate::state::Field;
use std::fmt::{self, Display, Formatter};

/// A single edit to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Full name text replaced
    FullName(String),
    /// Size selection replaced
    Size(String),
    /// Topping checkbox toggled
    Topping {
        /// Checkbox value (topping id)
        id: String,
        /// New checked state
        checked: bool,
    },
}

impl FieldChange {
    /// Full name edit
    #[inline]
    #[must_use]
    pub fn full_name(value: impl Into<String>) -> Self {
        Self::FullName(value.into())
    }

    /// Size selection
    #[inline]
    #[must_use]
    pub fn size(value: impl Into<String>) -> Self {
        Self::Size(value.into())
    }

    /// Check a topping
    #[inline]
    #[must_use]
    pub fn check(id: impl Into<String>) -> Self {
        Self::Topping {
            id: id.into(),
            checked: true,
        }
    }

    /// Uncheck a topping
    #[inline]
    #[must_use]
    pub fn uncheck(id: impl Into<String>) -> Self {
        Self::Topping {
            id: id.into(),
            checked: false,
        }
    }

    /// Field this change targets
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::FullName(_) => Field::FullName,
            Self::Size(_) => Field::Size,
            Self::Topping { .. } => Field::Toppings,
        }
    }
}

/// Kind of input element that fired an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text input
    Text,
    /// Drop-down select
    Select,
    /// Checkbox
    Checkbox,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
        })
    }
}

/// Raw change event from the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// Element kind
    pub kind: InputKind,
    /// Element id (unused for checkboxes)
    pub id: String,
    /// Element value
    pub value: String,
    /// Checked state (checkboxes only)
    pub checked: bool,
}

impl InputEvent {
    /// Text input event
    #[must_use]
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Text,
            id: id.into(),
            value: value.into(),
            checked: false,
        }
    }

    /// Select event
    #[must_use]
    pub fn select(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Select,
            id: id.into(),
            value: value.into(),
            checked: false,
        }
    }

    /// Checkbox event; `value` is the topping id
    #[must_use]
    pub fn checkbox(value: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: InputKind::Checkbox,
            id: String::new(),
            value: value.into(),
            checked,
        }
    }
}

impl TryFrom<InputEvent> for FieldChange {
    type Error = ChangeError;

    fn try_from(event: InputEvent) -> Result<Self, Self::Error> {
        if event.kind == InputKind::Checkbox {
            return Ok(Self::Topping {
                id: event.value,
                checked: event.checked,
            });
        }

        match event.id.parse::<Field>()? {
            Field::FullName => Ok(Self::FullName(event.value)),
            Field::Size => Ok(Self::Size(event.value)),
            Field::Toppings => Err(ChangeError::WrongInputKind {
                field: event.id,
                kind: event.kind.to_string(),
            }),
        }
    }
}
