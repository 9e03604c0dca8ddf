use actix_cors::Cors;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use contact_api::config::AppConfig;
use contact_api::create_pool;
use contact_api::handlers;
use contact_api::middleware::{RequestTimeout, request_timeout};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    tracing::debug!(?config, "configuration loaded");

    let db = create_pool(&config.database)
        .await
        .map_err(std::io::Error::other)?;
    tracing::info!("Connected to database");

    if config.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("Database migrations applied");
    }

    let db_data = web::Data::new(db);
    let timeout_data = web::Data::new(RequestTimeout(config.server.request_timeout));

    let bind_addr = config.server.bind_address();
    tracing::info!("Server running at http://{bind_addr}");

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(from_fn(request_timeout))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(db_data.clone())
            .app_data(timeout_data.clone())
            .configure(handlers::init_routes)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.bind(&bind_addr)?.run().await
}
