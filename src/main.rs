use actix_web::{App, HttpServer};
use checkout_mock::config::Config;
use checkout_mock::middleware::{cors, EndpointDelay, RequestId};
use checkout_mock::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` wins over the configured `LOG_LEVEL`
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("checkout_mock={},actix_web=info", log_level).into());

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(std::io::Error::other)?;
    init_tracing(&config.app.log_level);
    config.validate().map_err(std::io::Error::other)?;

    tracing::info!("Starting checkout mock");
    tracing::info!("Environment: {}", config.app.env);
    if config.npg.api_key.is_empty() {
        tracing::warn!("NPG_API_KEY not set, upstream card-data calls will be rejected");
    }
    if config.app.endpoint_delay_ms > 0 {
        tracing::info!("Endpoint delay: {} ms", config.app.endpoint_delay_ms);
    }

    let state = AppState::from_config(&config).map_err(std::io::Error::other)?;
    match &state.proxy {
        Some(proxy) => tracing::info!("Passthrough target: {}", proxy.target()),
        None => tracing::info!("No passthrough target, unmatched routes answer 404"),
    }

    let delay_ms = config.app.endpoint_delay_ms;
    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(cors())
            .wrap(EndpointDelay::from_millis(delay_ms))
            .wrap(RequestId)
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.server.workers);

    // One listener per configured port
    for address in config.server.bind_addresses() {
        server = server.bind(&address)?;
        tracing::info!("Listening on http://{}", address);
    }

    server.run().await
}
