//! The order form component
//!
//! [`OrderForm`] owns the field values and everything derived from them:
//! - inline errors, revalidated per field on each change
//! - the submit-disabled flag, recomputed from whole-form validity after
//!   every mutation
//! - the submission banner
//!
//! Submission is split into [`OrderForm::begin_submit`] and
//! [`OrderForm::complete_submit`] so a caller can run the request on its
//! own executor; [`OrderForm::submit`] drives both halves with an
//! [`OrderClient`].

use crate::catalog::{MenuOption, Size, ToppingId};
use crate::change::{FieldChange, InputEvent};
use crate::error::{ChangeError, SubmitError, SubmitRejected};
use crate::order::{OrderClient, OrderConfirmation, ValidOrder};
use crate::state::{ErrorState, Field, FormState, SubmissionStatus};
use crate::validation::{validate_full_name, validate_order, validate_size};

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was sent, or a response arrived with nothing pending
    Rejected(SubmitRejected),
    /// Order placed; carries the confirmation message
    Placed(String),
    /// Request sent but the order was not placed
    Failed(SubmitError),
}

impl SubmitOutcome {
    /// Check if the order was placed
    #[inline]
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// Pizza order form
#[derive(Debug, Clone)]
pub struct OrderForm {
    state: FormState,
    errors: ErrorState,
    status: SubmissionStatus,
    submit_disabled: bool,
    in_flight: bool,
}

impl OrderForm {
    /// Create an empty form
    ///
    /// An empty form is invalid, so submit starts disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(FormState::default())
    }

    /// Create a form pre-filled with values
    ///
    /// No inline errors are shown until a field is edited.
    #[must_use]
    pub fn with_state(state: FormState) -> Self {
        let mut form = Self {
            state,
            errors: ErrorState::default(),
            status: SubmissionStatus::Idle,
            submit_disabled: true,
            in_flight: false,
        };
        form.revalidate();
        form
    }

    /// Current field values
    #[inline]
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current inline errors
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Current banner
    #[inline]
    #[must_use]
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether the submit control is disabled
    #[inline]
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    /// Whether a submission is awaiting its response
    #[inline]
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Size options, with the current selection marked
    #[must_use]
    pub fn size_options(&self) -> Vec<MenuOption> {
        Size::ALL
            .into_iter()
            .map(|size| MenuOption {
                value: size.code(),
                label: size.label(),
                selected: self.state.size == size.code(),
            })
            .collect()
    }

    /// Topping checkboxes in catalog order, with checked state
    #[must_use]
    pub fn topping_options(&self) -> Vec<MenuOption> {
        ToppingId::ALL
            .into_iter()
            .map(|topping| MenuOption {
                value: topping.code(),
                label: topping.label(),
                selected: self.state.has_topping(topping.code()),
            })
            .collect()
    }

    /// Apply one edit
    ///
    /// The edited scalar field is validated on its own and its inline error
    /// set or cleared. Toppings carry no inline error. Overall validity is
    /// recomputed afterwards.
    pub fn apply_change(&mut self, change: FieldChange) {
        let field = change.field();
        match change {
            FieldChange::FullName(value) => {
                let error = validate_full_name(&value).err();
                self.state.full_name = value;
                self.errors.set(Field::FullName, error);
            }
            FieldChange::Size(value) => {
                let error = validate_size(&value).err();
                self.state.size = value;
                self.errors.set(Field::Size, error);
            }
            FieldChange::Topping { id, checked } => {
                if checked {
                    self.state.toppings.insert(id);
                } else {
                    self.state.toppings.shift_remove(&id);
                }
            }
        }

        tracing::debug!(
            "Applied change to {}: {}",
            field,
            self.errors.get(field).map_or_else(|| "ok".to_string(), ToString::to_string)
        );

        self.revalidate();
    }

    /// Apply a raw input event
    ///
    /// # Errors
    /// [`ChangeError`] if the event maps onto no field; the form is left
    /// untouched.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), ChangeError> {
        let change = FieldChange::try_from(event).map_err(|e| {
            tracing::warn!("Ignoring input event: {}", e);
            e
        })?;
        self.apply_change(change);
        Ok(())
    }

    /// Recompute the submit-disabled flag from whole-form validity
    ///
    /// Returns whether the form is currently valid. Submit stays disabled
    /// while a submission is in flight regardless of validity.
    pub fn revalidate(&mut self) -> bool {
        let valid = validate_order(&self.state).is_ok();
        let disabled = self.in_flight || !valid;
        if disabled != self.submit_disabled {
            tracing::debug!("Submit {}", if disabled { "disabled" } else { "enabled" });
        }
        self.submit_disabled = disabled;
        valid
    }

    /// Start a submission
    ///
    /// Disables submit immediately, then re-checks whole-form validity. On
    /// success the form is marked in flight and the order to send is
    /// returned; the caller must report the response through
    /// [`Self::complete_submit`].
    ///
    /// # Errors
    /// - `SubmitRejected::InFlight` if a submission is still pending
    /// - `SubmitRejected::Invalid` if the form fails validation
    pub fn begin_submit(&mut self) -> Result<ValidOrder, SubmitRejected> {
        self.submit_disabled = true;

        if self.in_flight {
            tracing::warn!("Submit ignored: an order is already in flight");
            return Err(SubmitRejected::InFlight);
        }

        let order = validate_order(&self.state).map_err(|report| {
            tracing::warn!("Submit rejected: {}", report);
            SubmitRejected::Invalid(report)
        })?;

        self.in_flight = true;
        tracing::info!(
            "Submitting order: size {} with {} toppings",
            order.size,
            order.toppings.len()
        );
        Ok(order)
    }

    /// Finish a submission with the response
    ///
    /// On success the banner shows the server message and the form resets
    /// to empty. On failure the banner shows the failure message and field
    /// values stay as they are so the order can be corrected and resent.
    ///
    /// A response with no pending submission is ignored and reported as
    /// `SubmitRejected::NotInFlight`; the form is left untouched.
    pub fn complete_submit(
        &mut self,
        result: Result<OrderConfirmation, SubmitError>,
    ) -> SubmitOutcome {
        if !self.in_flight {
            tracing::warn!("Ignoring order response: no submission in flight");
            return SubmitOutcome::Rejected(SubmitRejected::NotInFlight);
        }
        self.in_flight = false;

        let outcome = match result {
            Ok(confirmation) => {
                tracing::info!("Order placed: {}", confirmation.message);
                self.status = SubmissionStatus::Success(confirmation.message.clone());
                self.state = FormState::default();
                self.errors.clear();
                SubmitOutcome::Placed(confirmation.message)
            }
            Err(error) => {
                match &error {
                    SubmitError::Transport(reason) => tracing::error!("Order not sent: {}", reason),
                    other => tracing::warn!("Order failed: {}", other),
                }
                self.status = SubmissionStatus::Failure(error.user_message());
                SubmitOutcome::Failed(error)
            }
        };

        self.revalidate();
        outcome
    }

    /// Submit the form through a client
    ///
    /// Sends at most one request.
    pub async fn submit<C>(&mut self, client: &C) -> SubmitOutcome
    where
        C: OrderClient + ?Sized,
    {
        let order = match self.begin_submit() {
            Ok(order) => order,
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };

        let result = client.place_order(&order).await;
        self.complete_submit(result)
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::MockOrderClient;
    use crate::validation::FieldError;
    use pretty_assertions::assert_eq;

    fn filled_form() -> OrderForm {
        OrderForm::with_state(
            FormState::new()
                .with_full_name("Alice")
                .with_size("M")
                .with_toppings(["1", "2"]),
        )
    }

    #[test]
    fn new_form_is_disabled_and_clean() {
        let form = OrderForm::new();
        assert!(form.is_submit_disabled());
        assert!(form.errors().is_clear());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn change_sets_then_clears_field_error() {
        let mut form = OrderForm::new();

        form.apply_change(FieldChange::full_name("Al"));
        assert_eq!(form.errors().get(Field::FullName), Some(&FieldError::FullNameTooShort));

        form.apply_change(FieldChange::full_name("Alice"));
        assert_eq!(form.errors().get(Field::FullName), None);
    }

    #[test]
    fn change_only_validates_edited_field() {
        let mut form = OrderForm::new();
        form.apply_change(FieldChange::size("XL"));

        assert_eq!(form.errors().message(Field::Size), "size must be S or M or L");
        // untouched field shows nothing even though it is invalid
        assert_eq!(form.errors().message(Field::FullName), "");
    }

    #[test]
    fn whole_form_rule_disables_submit_without_inline_error() {
        let mut form = filled_form();
        for id in ["3", "4", "5", "6"] {
            form.apply_change(FieldChange::check(id));
        }

        assert!(form.errors().is_clear());
        assert!(form.is_submit_disabled());

        form.apply_change(FieldChange::uncheck("6"));
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn topping_toggle_is_idempotent() {
        let mut form = filled_form();
        form.apply_change(FieldChange::check("1"));
        assert_eq!(form.state().toppings.len(), 2);

        form.apply_change(FieldChange::uncheck("5"));
        assert_eq!(form.state().toppings.len(), 2);
    }

    #[test]
    fn handle_input_ignores_unknown_fields() {
        let mut form = filled_form();
        let before = form.state().clone();

        let err = form.handle_input(InputEvent::text("email", "x")).unwrap_err();
        assert_eq!(err, ChangeError::UnknownField("email".into()));
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn options_reflect_state() {
        let form = filled_form();

        let sizes: Vec<(&str, bool)> = form.size_options().iter().map(|o| (o.value, o.selected)).collect();
        assert_eq!(sizes, vec![("S", false), ("M", true), ("L", false)]);

        let checked: Vec<&str> = form
            .topping_options()
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(checked, vec!["Pepperoni", "Green Peppers"]);
    }

    #[test]
    fn begin_submit_disables_and_rejects_second_trigger() {
        let mut form = filled_form();
        assert!(!form.is_submit_disabled());

        let order = form.begin_submit().unwrap();
        assert_eq!(order.full_name, "Alice");
        assert!(form.is_submit_disabled());
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn edits_while_in_flight_keep_submit_disabled() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        form.apply_change(FieldChange::full_name("Alicia"));
        assert!(form.is_submit_disabled());
    }

    #[test]
    fn begin_submit_rejects_invalid_form() {
        let mut form = OrderForm::new();
        let rejected = form.begin_submit().unwrap_err();

        assert!(matches!(rejected, SubmitRejected::Invalid(_)));
        assert!(form.is_submit_disabled());
        assert!(!form.is_submitting());
    }

    #[test]
    fn complete_without_begin_leaves_form_untouched() {
        let mut form = filled_form();
        let before = form.state().clone();

        let outcome = form.complete_submit(Ok(OrderConfirmation::new("x")));

        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejected::NotInFlight));
        assert_eq!(form.state(), &before);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let first = form.complete_submit(Ok(OrderConfirmation::new("Order placed")));
        assert!(first.is_placed());

        // user starts a new order before a stray second response arrives
        form.apply_change(FieldChange::full_name("Bob"));
        form.apply_change(FieldChange::size("L"));

        let second = form.complete_submit(Err(SubmitError::Transport("late".into())));
        assert_eq!(second, SubmitOutcome::Rejected(SubmitRejected::NotInFlight));
        assert_eq!(form.state().full_name, "Bob");
        assert_eq!(form.state().size, "L");
        assert_eq!(form.status(), &SubmissionStatus::Success("Order placed".into()));
    }

    #[tokio::test]
    async fn submit_sends_order_and_resets_on_success() {
        let mut client = MockOrderClient::new();
        client
            .expect_place_order()
            .withf(|order: &ValidOrder| {
                order.full_name == "Alice"
                    && order.size == Size::M
                    && order.toppings == vec![ToppingId::Pepperoni, ToppingId::GreenPeppers]
            })
            .times(1)
            .returning(|_| Ok(OrderConfirmation::new("Order placed")));

        let mut form = filled_form();
        let outcome = form.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Placed("Order placed".into()));
        assert_eq!(form.status().success_message(), "Order placed");
        assert_eq!(form.status().failure_message(), "");
        assert!(form.state().is_empty());
        assert!(form.is_submit_disabled());
    }

    #[tokio::test]
    async fn submit_keeps_state_on_failure() {
        let mut client = MockOrderClient::new();
        client.expect_place_order().times(1).returning(|_| {
            Err(SubmitError::Rejected {
                status: 500,
                message: Some("kitchen on fire".into()),
            })
        });

        let mut form = filled_form();
        let before = form.state().clone();
        let outcome = form.submit(&client).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.status().failure_message(), "kitchen on fire");
        assert_eq!(form.status().success_message(), "");
        assert_eq!(form.state(), &before);
        assert!(!form.is_submitting());
        // still valid, so it can be resent
        assert!(!form.is_submit_disabled());
    }

    #[tokio::test]
    async fn submit_never_calls_client_for_invalid_form() {
        let mut client = MockOrderClient::new();
        client.expect_place_order().times(0);

        let mut form = OrderForm::new();
        form.apply_change(FieldChange::full_name("Al"));
        let outcome = form.submit(&client).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(SubmitRejected::Invalid(_))));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn success_replaces_previous_failure() {
        let mut failing = MockOrderClient::new();
        failing
            .expect_place_order()
            .returning(|_| Err(SubmitError::Transport("connection refused".into())));
        let mut succeeding = MockOrderClient::new();
        succeeding
            .expect_place_order()
            .returning(|_| Ok(OrderConfirmation::new("Order placed")));

        let mut form = filled_form();
        form.submit(&failing).await;
        assert!(!form.status().failure_message().is_empty());

        form.submit(&succeeding).await;
        assert_eq!(form.status(), &SubmissionStatus::Success("Order placed".into()));
    }
}
