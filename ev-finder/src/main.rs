use ev_finder::chargers::{ChargerClient, ChargerClientConfig, MockChargers};
use ev_finder::config::FinderConfig;
use ev_finder::map::MapConfig;
use ev_finder::web::{AppState, SessionStore, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ev_finder=info,tower_http=info")),
        )
        .init();

    let config = FinderConfig::from_env().expect("Invalid configuration");

    let mut map = MapConfig::default();
    if let Some(tile_url) = &config.tile_url {
        map = map.with_tile_url(tile_url);
    }

    let sessions = SessionStore::new(config.session_ttl());

    // Pick the charger backend
    let state = match &config.mock_data {
        Some(path) => {
            warn!(path = %path.display(), "serving mock charger data");
            let mock = MockChargers::from_file(path).expect("Failed to load mock charger data");
            AppState::new(mock, sessions, map)
        }
        None => {
            let client_config =
                ChargerClientConfig::new(&config.backend_url).with_timeout(config.timeout_secs);
            let client = ChargerClient::new(client_config).expect("Failed to create charger client");
            info!(url = %client.search_url(), "using charger backend");
            AppState::new(client, sessions, map)
        }
    };

    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("EV Finder listening on http://{addr}");
    info!("Open http://{addr} in your browser for the web interface.");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
