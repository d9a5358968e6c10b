use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trotro_server::cache::{CacheConfig, PlanCache};
use trotro_server::graph::RouteGraph;
use trotro_server::planner::SearchConfig;
use trotro_server::seed::{accra_network, load_network};
use trotro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load the seed network: a file if configured, the built-in Accra
    // dataset otherwise.
    let network = match std::env::var("TROTRO_SEED") {
        Ok(path) => match load_network(&path) {
            Ok(network) => {
                tracing::info!(path = %path, "loaded seed network");
                network
            }
            Err(e) => {
                eprintln!("Failed to load seed network from {path}: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => accra_network(),
    };

    let graph = RouteGraph::from_seed(&network);
    tracing::info!(
        stops = graph.stop_count(),
        edges = graph.edge_count(),
        "route graph ready"
    );

    let cache = PlanCache::new(&CacheConfig::default());
    let config = SearchConfig::default();

    let state = AppState::new(graph, cache, config);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trotro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                 - Health check");
    println!("  GET  /api/stops/search       - Search stops by name");
    println!("  GET  /api/routes/plan        - Plan the cheapest route");
    println!("  POST /api/routes/contribute  - Contribute route data");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
