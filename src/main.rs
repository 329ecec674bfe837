use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::Database;
use std::sync::Arc;

use logistics_backend::api::{AuthApi, EntriesApi, HealthApi, LogsApi, UsersApi};
use logistics_backend::config::{self, BootstrapSettings};
use logistics_backend::AppData;
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::logging::init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Invalid configuration");

    // A verified datastore connection is a hard startup requirement - the
    // process must not accept traffic without one
    let db = Database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db, &settings));

    let auth_api = AuthApi::new(
        Arc::clone(&app_data.credential_verifier),
        Arc::clone(&app_data.token_service),
    );
    let entries_api = EntriesApi::new(
        Arc::clone(&app_data.token_service),
        Arc::clone(&app_data.entry_service),
    );
    let users_api = UsersApi::new(
        Arc::clone(&app_data.token_service),
        Arc::clone(&app_data.admin_service),
    );
    let logs_api = LogsApi::new(
        Arc::clone(&app_data.token_service),
        Arc::clone(&app_data.log_store),
    );

    let api_service = OpenApiService::new(
        (HealthApi, auth_api, entries_api, users_api, logs_api),
        "Logistics Backend",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://localhost:{}/api", settings.port()));

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.bind_addr());
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(settings.bind_addr())).run(app).await
}
