//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{JsonFileStore, MockEnhanceAdapter, OpenAiEnhanceAdapter},
    config::Config,
    error::ApiError,
    web::{
        enhance_handler, export_resume_handler, health_handler, import_handler,
        list_resumes_handler, rest::ApiDoc, save_resume_handler, state::AppState,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use resume_core::ports::EnhanceService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Open the Resume Store ---
    info!("Opening resume store at {}", config.storage_path.display());
    let store = Arc::new(JsonFileStore::open(config.storage_path.clone()).await?);

    // --- 3. Initialize the Enhancer Adapter ---
    let enhancer: Arc<dyn EnhanceService> = match &config.openai_api_key {
        Some(api_key) => {
            info!("OPENAI_API_KEY found, enhancing with model '{}'", config.enhance_model);
            let openai_config = OpenAIConfig::new().with_api_key(api_key);
            let openai_client = Client::with_config(openai_config);
            Arc::new(OpenAiEnhanceAdapter::new(
                openai_client,
                config.enhance_model.clone(),
            ))
        }
        None => {
            info!("No OPENAI_API_KEY set, using the deterministic mock enhancer");
            Arc::new(MockEnhanceAdapter::new())
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        store,
        enhancer,
        config: config.clone(),
    });

    // CORS for the two local frontend origins.
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:8080".parse::<HeaderValue>().unwrap(),
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    let api_router = Router::new()
        .route("/ai-enhance", post(enhance_handler))
        .route("/save-resume", post(save_resume_handler))
        .route("/resumes", get(list_resumes_handler))
        .route("/resumes/{key}/export", get(export_resume_handler))
        .route("/import", post(import_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
