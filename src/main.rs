use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use checkout_webhook_api::config::SupabaseConfig;
use checkout_webhook_api::db::supabase::SupabaseClient;
use checkout_webhook_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let config = SupabaseConfig::from_env();
    let store = SupabaseClient::new(config);
    println!("Supabase client initialized");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(store.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::resource("/api/webhook")
                    // POST is the only real method; everything else falls
                    // through to the 405 responder.
                    .route(web::post().to(routes::webhook::stripe_webhook::<SupabaseClient>))
                    .route(web::route().to(routes::webhook::method_not_allowed)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
