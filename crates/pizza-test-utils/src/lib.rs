//! Testing utilities for the pizza order workspace
//!
//! Shared test helpers, fixtures, and a scripted order client.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use pizza_form::{
    FieldChange, FormState, OrderClient, OrderConfirmation, OrderForm, SubmitError, ValidOrder,
};
use std::collections::VecDeque;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn valid_state() -> FormState {
    FormState::new()
        .with_full_name("Alice")
        .with_size("M")
        .with_toppings(["1", "2"])
}

/// Fill a fresh form through the change handler, like a user would.
pub fn fill_form(full_name: &str, size: &str, toppings: &[&str]) -> OrderForm {
    let mut form = OrderForm::new();
    form.apply_change(FieldChange::full_name(full_name));
    form.apply_change(FieldChange::size(size));
    for id in toppings {
        form.apply_change(FieldChange::check(*id));
    }
    form
}

pub fn valid_form() -> OrderForm {
    fill_form("Alice", "M", &["1", "2"])
}

/// Order client that replays scripted responses and records requests.
///
/// Once the script runs out every call fails with a transport error.
#[derive(Debug, Default)]
pub struct StubOrderClient {
    responses: Mutex<VecDeque<Result<OrderConfirmation, SubmitError>>>,
    requests: Mutex<Vec<ValidOrder>>,
}

impl StubOrderClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeeding(message: &str) -> Self {
        Self::new().then_ok(message)
    }

    pub fn failing(error: SubmitError) -> Self {
        Self::new().then_err(error)
    }

    pub fn then_ok(self, message: &str) -> Self {
        self.responses
            .lock()
            .push_back(Ok(OrderConfirmation::new(message)));
        self
    }

    pub fn then_err(self, error: SubmitError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Orders received so far, in call order.
    pub fn requests(&self) -> Vec<ValidOrder> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl OrderClient for StubOrderClient {
    async fn place_order(&self, order: &ValidOrder) -> Result<OrderConfirmation, SubmitError> {
        self.requests.lock().push(order.clone());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::Transport("no scripted response".to_string())))
    }
}
