use std::env;

use url::Url;

/// Connection settings for the profile store, read once at startup and
/// passed into the client constructor instead of living in process globals.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
}

impl SupabaseConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_SERVICE_KEY` from the environment.
    /// Both are required for the process to come up at all.
    pub fn from_env() -> Self {
        let url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let service_key =
            env::var("SUPABASE_SERVICE_KEY").expect("SUPABASE_SERVICE_KEY must be set");

        Self::new(&url, &service_key)
    }

    pub fn new(url: &str, service_key: &str) -> Self {
        Url::parse(url).expect("SUPABASE_URL may be incorrect! Failed to parse.");

        Self {
            url: url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }
}
