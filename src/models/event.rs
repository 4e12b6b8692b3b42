use serde::{Deserialize, Serialize};

/// The slice of a Stripe checkout session this service cares about:
/// three places an email may live, plus the customer id. Every field is
/// optional because Stripe omits whatever wasn't collected at checkout.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CheckoutSession {
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub client_reference_id: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl CheckoutSession {
    /// Resolves the buyer's email, first non-empty value wins:
    /// `customer_email`, then `customer_details.email`, then
    /// `client_reference_id`. Empty strings count as absent.
    pub fn resolved_email(&self) -> Option<String> {
        [
            self.customer_email.as_deref(),
            self.customer_details.as_ref().and_then(|d| d.email.as_deref()),
            self.client_reference_id.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|email| !email.is_empty())
        .map(str::to_owned)
    }
}
