use std::sync::Arc;

use roster_server::{database::RosterDatabase, router, AppState};

#[tokio::main]
async fn main() -> roster_core::RosterResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("roster_server=debug,tower_http=debug")
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://roster.db".to_string());

    let db = match RosterDatabase::new(&database_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!(%e, "Failed to open database");
            return Ok(());
        }
    };

    if let Err(e) = db.run_migrations().await {
        tracing::error!(%e, "Failed to run migrations");
        return Ok(());
    }

    let app_state = Arc::new(AppState { db });

    let app = router(app_state);

    let addr = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!("Starting roster server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %addr);
            return Ok(());
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, addr = %addr);
    }

    Ok(())
}
