use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The column set written to a profile row when a checkout completes.
/// `stripe_customer_id` stays out of the JSON body entirely when Stripe
/// didn't send a customer id, so an existing value is not nulled out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub subscription_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn activate(stripe_customer_id: Option<String>) -> Self {
        Self {
            subscription_status: "active".to_string(),
            stripe_customer_id,
            updated_at: Utc::now(),
        }
    }
}
