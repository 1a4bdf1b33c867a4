//! Pizza order backend client
//!
//! [`HttpOrderClient`] implements [`pizza_form::OrderClient`] over HTTP:
//! one `POST {base_url}/api/order` per submission, JSON in and out.
//!
//! # Example
//!
//! ```rust,ignore
//! use pizza_client::{ClientConfig, HttpOrderClient};
//! use pizza_form::{FieldChange, OrderForm};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpOrderClient::new(&ClientConfig::new())?;
//!
//! let mut form = OrderForm::new();
//! form.apply_change(FieldChange::full_name("Alice"));
//! form.apply_change(FieldChange::size("L"));
//!
//! let outcome = form.submit(&client).await;
//! println!("{:?}", form.status());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpOrderClient;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
