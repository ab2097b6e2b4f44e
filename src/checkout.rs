//! Checkout operations: initiate a payment transaction and verify one.
//!
//! Each operation is a thin validating wrapper over [`EcraspayClient`]:
//! required fields are checked before any network traffic, the payload is
//! mapped to the gateway's wire field names, and the response comes back as
//! an untyped JSON object.

use bon::Builder;
use http::Method;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::client::{EcraspayClient, JsonObject};
use crate::errors::{EcraspayError, Result};

/// Parameters for [`Checkout::initiate_transaction`].
///
/// `amount`, `payment_reference`, `customer_name` and `customer_email` are
/// required; the remaining fields are forwarded as-is (empty strings
/// included) and judged by the gateway, not by this layer. Serde renames
/// carry the wire field names.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct InitiateTransactionRequest {
    /// Amount in the smallest currency unit. Must be greater than zero.
    pub amount: u64,
    /// Unique merchant-side reference for the transaction.
    pub payment_reference: String,
    pub customer_name: String,
    pub customer_email: String,
    #[builder(default)]
    pub redirect_url: String,
    #[builder(default)]
    pub description: String,
    /// Who absorbs the gateway fee: `"customer"` or `"merchant"`.
    #[builder(default)]
    pub fee_bearer: String,
    #[builder(default)]
    pub currency: String,
    #[serde(rename = "paymentMethods")]
    #[builder(default)]
    pub payment_method: String,
    #[serde(rename = "customerPhoneNumber")]
    #[builder(default)]
    pub customer_phone: String,
    /// Free-form metadata attached to the transaction.
    pub metadata: Option<Value>,
    /// Extra keys merged over the assembled payload last, overriding any
    /// default-mapped field or adding undocumented ones. Shallow merge.
    #[serde(skip)]
    #[builder(default)]
    pub extra_params: Map<String, Value>,
}

impl InitiateTransactionRequest {
    fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(EcraspayError::validation(
                "amount",
                "must be greater than 0",
            ));
        }
        if self.payment_reference.is_empty() {
            return Err(EcraspayError::validation("paymentReference", "is required"));
        }
        if self.customer_name.is_empty() {
            return Err(EcraspayError::validation("customerName", "is required"));
        }
        if self.customer_email.is_empty() {
            return Err(EcraspayError::validation("customerEmail", "is required"));
        }
        Ok(())
    }

    fn to_payload(&self) -> Result<JsonObject> {
        let mut payload = match serde_json::to_value(self).map_err(EcraspayError::Serialization)? {
            Value::Object(map) => map,
            _ => {
                return Err(EcraspayError::Serialization(serde_json::Error::custom(
                    "request did not serialize to a JSON object",
                )));
            }
        };
        for (key, value) in &self.extra_params {
            payload.insert(key.clone(), value.clone());
        }
        Ok(payload)
    }
}

/// Checkout API surface.
#[derive(Debug, Clone)]
pub struct Checkout {
    client: EcraspayClient,
}

impl Checkout {
    /// Wrap an [`EcraspayClient`].
    pub fn new(client: EcraspayClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &EcraspayClient {
        &self.client
    }

    /// Initiate a payment transaction.
    ///
    /// Validates required fields first (short-circuiting, no network call on
    /// failure), then POSTs the mapped payload to `/payment/initiate`.
    pub async fn initiate_transaction(
        &self,
        request: &InitiateTransactionRequest,
    ) -> Result<JsonObject> {
        request.validate()?;
        let payload = Value::Object(request.to_payload()?);
        self.client
            .request(Method::POST, "/payment/initiate", Some(&payload))
            .await
    }

    /// Verify a transaction by its gateway-assigned ID.
    ///
    /// The ID is percent-encoded before being embedded in the request path,
    /// so IDs with special characters cannot corrupt the URL.
    pub async fn verify_transaction(&self, transaction_id: &str) -> Result<JsonObject> {
        if transaction_id.is_empty() {
            return Err(EcraspayError::validation("transactionId", "is required"));
        }
        let path = format!(
            "/payment/transaction/verify/{}",
            urlencoding::encode(transaction_id)
        );
        self.client.request(Method::GET, &path, None).await
    }
}
