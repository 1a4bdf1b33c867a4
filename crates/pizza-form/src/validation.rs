//! Order validation rules
//!
//! One pure function per field plus [`validate_order`] for the whole form.
//! Field validators stop at the first violated rule; the whole-form
//! validator collects every violation into a [`ValidationReport`].

use crate::catalog::{Size, ToppingId};
use crate::order::ValidOrder;
use crate::state::{Field, FormState};
use std::fmt::{self, Display, Formatter};

/// Minimum full name length, in characters
pub const FULL_NAME_MIN_CHARS: usize = 3;

/// Maximum full name length, in characters
pub const FULL_NAME_MAX_CHARS: usize = 20;

/// Maximum number of toppings on one pizza
pub const MAX_TOPPINGS: usize = 5;

/// A violated validation rule
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Full name shorter than [`FULL_NAME_MIN_CHARS`]
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,

    /// Full name longer than [`FULL_NAME_MAX_CHARS`]
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,

    /// Size is not one of S, M, L
    #[error("size must be S or M or L")]
    SizeIncorrect,

    /// Topping id outside the catalog
    #[error("toppings must be one of the following values: 1, 2, 3, 4, 5 (got '{value}')")]
    ToppingIncorrect {
        /// Offending raw value
        value: String,
    },

    /// More than [`MAX_TOPPINGS`] toppings selected
    #[error("toppings field must have less than or equal to 5 items")]
    TooManyToppings {
        /// Number of toppings selected
        count: usize,
    },
}

impl FieldError {
    /// Field the rule belongs to
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::FullNameTooShort | Self::FullNameTooLong => Field::FullName,
            Self::SizeIncorrect => Field::Size,
            Self::ToppingIncorrect { .. } | Self::TooManyToppings { .. } => Field::Toppings,
        }
    }
}

/// Every rule violated by a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// All violations in field order
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First violation for a field
    #[must_use]
    pub fn first_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Whether the report contains the given violation
    #[must_use]
    pub fn contains(&self, error: &FieldError) -> bool {
        self.errors.contains(error)
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validate the full name length
///
/// Length is counted in characters, not bytes.
pub fn validate_full_name(full_name: &str) -> Result<String, FieldError> {
    let len = full_name.chars().count();
    if len < FULL_NAME_MIN_CHARS {
        return Err(FieldError::FullNameTooShort);
    }
    if len > FULL_NAME_MAX_CHARS {
        return Err(FieldError::FullNameTooLong);
    }
    Ok(full_name.to_string())
}

/// Validate a size code
pub fn validate_size(size: &str) -> Result<Size, FieldError> {
    size.parse().map_err(|_| FieldError::SizeIncorrect)
}

/// Coerce one raw topping id into the catalog
pub fn validate_topping(value: &str) -> Result<ToppingId, FieldError> {
    value.parse().map_err(|_| FieldError::ToppingIncorrect {
        value: value.to_string(),
    })
}

/// Validate the topping selection
///
/// Reports the first unknown id, otherwise the count rule.
pub fn validate_toppings<'a, I>(toppings: I) -> Result<Vec<ToppingId>, FieldError>
where
    I: IntoIterator<Item = &'a str>,
{
    let ids = toppings
        .into_iter()
        .map(validate_topping)
        .collect::<Result<Vec<_>, _>>()?;

    if ids.len() > MAX_TOPPINGS {
        return Err(FieldError::TooManyToppings { count: ids.len() });
    }
    Ok(ids)
}

/// Validate the whole form
///
/// Unlike the field validators this collects every violation, including
/// the topping count rule even when some ids are unknown.
///
/// # Errors
/// [`ValidationReport`] listing each violated rule in field order.
pub fn validate_order(state: &FormState) -> Result<ValidOrder, ValidationReport> {
    let mut errors = Vec::new();

    let full_name = validate_full_name(&state.full_name).map_err(|e| errors.push(e)).ok();
    let size = validate_size(&state.size).map_err(|e| errors.push(e)).ok();

    let mut toppings = Vec::with_capacity(state.toppings.len());
    for raw in &state.toppings {
        match validate_topping(raw) {
            Ok(id) => toppings.push(id),
            Err(e) => errors.push(e),
        }
    }
    if state.toppings.len() > MAX_TOPPINGS {
        errors.push(FieldError::TooManyToppings {
            count: state.toppings.len(),
        });
    }

    match (full_name, size) {
        (Some(full_name), Some(size)) if errors.is_empty() => Ok(ValidOrder {
            full_name,
            size,
            toppings,
        }),
        _ => Err(ValidationReport { errors }),
    }
}

/// Whether the form satisfies every rule
#[inline]
#[must_use]
pub fn is_valid(state: &FormState) -> bool {
    validate_order(state).is_ok()
}
