use subway_server::config::ServerConfig;
use subway_server::store::MemoryStore;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // One store, owned here, shared by both services.
    let state = AppState::new(MemoryStore::new());
    let app = create_router(state);

    println!("Subway management server listening on http://{}", config.addr);
    println!();
    println!("API Endpoints:");
    println!("  GET    /health        - Health check");
    println!("  POST   /stations      - Create a station");
    println!("  GET    /stations      - List stations");
    println!("  DELETE /stations/:id  - Delete a station");
    println!("  POST   /lines         - Create a line");
    println!("  GET    /lines         - List lines");
    println!("  GET    /lines/:id     - Get a line");
    println!("  PUT    /lines/:id     - Update a line");
    println!("  DELETE /lines/:id     - Delete a line");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.unwrap();
}
