use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let supabase_result = check_supabase_config();
    health
        .services
        .insert("supabase".to_string(), supabase_result.clone());

    if supabase_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_supabase_config() -> ServiceStatus {
    // Configuration-only check; the webhook path is the only thing that
    // should ever write to the store.
    let url = env::var("SUPABASE_URL").ok();
    let service_key = env::var("SUPABASE_SERVICE_KEY").ok();

    match (url, service_key) {
        (Some(url), Some(key)) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!(
                    "Supabase configured at {} (service key {})",
                    url, masked_key
                )),
            }
        }
        (url, service_key) => {
            let mut missing = Vec::new();

            if url.is_none() {
                missing.push("SUPABASE_URL");
            }
            if service_key.is_none() {
                missing.push("SUPABASE_SERVICE_KEY");
            }

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Missing configuration: {}", missing.join(", "))),
            }
        }
    }
}
