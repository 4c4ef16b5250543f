use wrenid::infrastructure;
use wrenid::presentation;

use dotenvy::dotenv;
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wrenid::infrastructure::auth::JwtAuthService;
use wrenid::infrastructure::state::AppState;

// 15 minutes
const DEFAULT_ACCESS_TOKEN_EXPIRY_SECS: i64 = 900;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    run(port, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(port: u16, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // try_init so repeated calls in tests are harmless
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "wrenid=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let (listener, app) = bootstrap(port).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn bootstrap(port: u16) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let database_url =
        env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let jwt_secret =
        env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?;
    let token_expiry = env::var("ACCESS_TOKEN_EXPIRY_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_SECS);

    let pool = infrastructure::db::create_pool(&database_url).await?;
    sqlx::migrate!().run(&pool).await?;

    let auth_service = Arc::new(JwtAuthService::new(&jwt_secret, token_expiry));
    let state = AppState::new(pool, auth_service);
    let app = presentation::router::app(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
