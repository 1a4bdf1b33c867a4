//! Pizza Order Form
//!
//! Form state, validation and submit gating for a pizza order page.
//!
//! # Overview
//!
//! - **OrderForm**: owns field values, inline errors, the submit-disabled
//!   flag and the success/failure banner
//! - **validation**: pure per-field validators plus a whole-form validator
//! - **OrderClient**: seam for sending a [`ValidOrder`] to the backend
//!
//! Rendering is left to the caller: read the form's state, errors, banner
//! and options, and feed back [`FieldChange`]s or [`InputEvent`]s.
//!
//! # Example
//!
//! ```rust
//! use pizza_form::{Field, FieldChange, OrderForm};
//!
//! let mut form = OrderForm::new();
//! form.apply_change(FieldChange::full_name("Al"));
//! form.apply_change(FieldChange::size("M"));
//!
//! assert!(form.is_submit_disabled());
//! assert_eq!(
//!     form.errors().message(Field::FullName),
//!     "full name must be at least 3 characters"
//! );
//!
//! form.apply_change(FieldChange::full_name("Alice"));
//! form.apply_change(FieldChange::check("1"));
//! assert!(!form.is_submit_disabled());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod change;
pub mod error;
pub mod form;
pub mod order;
pub mod state;
pub mod validation;

// Re-exports
pub use catalog::{MenuOption, Size, ToppingId, UnknownCode};
pub use change::{FieldChange, InputEvent, InputKind};
pub use error::{ChangeError, SubmitError, SubmitRejected};
pub use form::{OrderForm, SubmitOutcome};
pub use order::{OrderClient, OrderConfirmation, ValidOrder};
pub use state::{ErrorState, Field, FormState, SubmissionStatus};
pub use validation::{validate_order, FieldError, ValidationReport};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving an order form
    pub use crate::{
        Field, FieldChange, FormState, InputEvent, OrderClient, OrderConfirmation, OrderForm,
        SubmissionStatus, SubmitError, SubmitOutcome, ValidOrder,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
