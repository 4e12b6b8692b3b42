use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::{Arc, Mutex};

use checkout_webhook_api::db::supabase::{ProfileStore, StoreError};
use checkout_webhook_api::models::profile::ProfileUpdate;
use checkout_webhook_api::routes;

/// In-memory stand-in for the Supabase client. Records every update it
/// receives and can be flipped into a failing mode.
#[derive(Clone, Default)]
pub struct FakeStore {
    updates: Arc<Mutex<Vec<(String, ProfileUpdate)>>>,
    fail: Arc<Mutex<bool>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        *store.fail.lock().unwrap() = true;
        store
    }

    pub fn recorded(&self) -> Vec<(String, ProfileUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

impl ProfileStore for FakeStore {
    async fn update_profile(
        &self,
        email: &str,
        update: &ProfileUpdate,
    ) -> Result<(), StoreError> {
        if *self.fail.lock().unwrap() {
            return Err(StoreError::Rejected {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }

        self.updates
            .lock()
            .unwrap()
            .push((email.to_string(), update.clone()));
        Ok(())
    }
}

/// Builds the same app `main` serves, with the fake store injected in
/// place of the Supabase client.
pub fn create_app(
    store: FakeStore,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .app_data(web::Data::new(store))
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::resource("/api/webhook")
                .route(web::post().to(routes::webhook::stripe_webhook::<FakeStore>))
                .route(web::route().to(routes::webhook::method_not_allowed)),
        )
}
