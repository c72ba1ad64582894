use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use teachmaster_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .expose_headers(["x-request-id"])
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let cors_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config).map_err(std::io::Error::other)?;
    let state = Arc::new(state);

    let status = state.settings_service.status().await;
    if status.configured {
        log::info!("AI completions enabled with model {}", status.model);
    } else {
        log::warn!("AI_API_KEY not set; serving template content until a key is configured");
    }

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&state)))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(cors(cors_origin.as_deref()))
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
