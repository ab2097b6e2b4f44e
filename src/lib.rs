//! # ecraspay - Ecraspay payment gateway client
//!
//! A small async client for the Ecraspay REST API: bearer-token
//! authentication, JSON payloads in, JSON objects out. Two operations are
//! exposed through [`Checkout`]: initiating a payment transaction and
//! verifying one.
//!
//! ```no_run
//! use ecraspay::{Checkout, EcraspayClient, Environment, InitiateTransactionRequest};
//!
//! # async fn run() -> ecraspay::Result<()> {
//! let client = EcraspayClient::builder()
//!     .api_key("sk_test_...")
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let checkout = Checkout::new(client);
//! let response = checkout
//!     .initiate_transaction(
//!         &InitiateTransactionRequest::builder()
//!             .amount(10_000)
//!             .payment_reference("unique_ref_123")
//!             .customer_name("Jane Doe")
//!             .customer_email("jane@example.com")
//!             .build(),
//!     )
//!     .await?;
//! println!("{response:?}");
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod errors;

// Re-exports for convenience
pub use checkout::{Checkout, InitiateTransactionRequest};
pub use client::{EcraspayClient, JsonObject};
pub use config::Environment;
pub use errors::{EcraspayError, Result};

/// Current version of the ecraspay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
