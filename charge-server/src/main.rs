use std::net::SocketAddr;

use charge_server::assistant::{ChatClient, ChatConfig};
use charge_server::ocm::{OcmClient, OcmConfig};
use charge_server::session::{SessionStore, SessionStoreConfig};
use charge_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The chat credential is required; refuse to start without it.
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("Error: OPENAI_API_KEY is not set.");
            eprintln!("Set it in the environment before starting the server.");
            std::process::exit(1);
        }
    };

    let mut chat_config = ChatConfig::new(&api_key);
    if let Ok(model) = std::env::var("OPENAI_MODEL") {
        chat_config = chat_config.with_model(model);
    }
    let assistant = ChatClient::new(chat_config).expect("Failed to create chat client");

    // The directory key is optional; Open Charge Map serves unauthenticated
    // requests at a lower rate limit.
    let mut ocm_config = OcmConfig::new();
    if let Ok(key) = std::env::var("OCM_API_KEY") {
        ocm_config = ocm_config.with_api_key(key);
    }
    let ocm = OcmClient::new(ocm_config).expect("Failed to create directory client");

    let sessions = SessionStore::new(&SessionStoreConfig::default());

    let state = AppState::new(ocm, assistant, sessions);
    let app = create_router(state, "static");

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("EV Charging Assistant listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health               - Health check");
    println!("  POST /api/session          - Create a chat session");
    println!("  GET  /api/stations/search  - Search nearby charging stations");
    println!("  POST /api/chat             - Send a chat message");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
