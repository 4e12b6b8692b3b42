use std::fmt;

use crate::config::SupabaseConfig;
use crate::models::profile::ProfileUpdate;

#[derive(Debug)]
pub enum StoreError {
    /// The request never produced a response (connect failure, timeout).
    Transport(reqwest::Error),
    /// The store answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Transport(e) => write!(f, "request to profile store failed: {}", e),
            StoreError::Rejected { status, body } => {
                write!(f, "profile store rejected update ({}): {}", status, body)
            }
        }
    }
}

/// The one primitive this service needs from the record store: update the
/// rows matching an email filter. The webhook handler is generic over this
/// trait so tests can swap in a recording fake.
pub trait ProfileStore {
    async fn update_profile(&self, email: &str, update: &ProfileUpdate)
        -> Result<(), StoreError>;
}

/// Supabase PostgREST client holding the service-role credential, which
/// bypasses row-level security. Built once at startup and shared across
/// requests; the inner reqwest client pools its connections.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl ProfileStore for SupabaseClient {
    async fn update_profile(
        &self,
        email: &str,
        update: &ProfileUpdate,
    ) -> Result<(), StoreError> {
        let endpoint = format!("{}/rest/v1/profiles", self.config.url);

        let response = self
            .http
            .patch(&endpoint)
            .query(&[("email", format!("eq.{}", email))])
            .header("apikey", &self.config.service_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_key),
            )
            .header("Prefer", "return=minimal")
            .json(update)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
