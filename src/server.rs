use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::protected::form;
use crate::handlers::public::auth;
use crate::middleware::require_token;
use crate::state::AppState;

/// Build the API router.
///
/// The token gate wraps every route, including the liveness root and any
/// unmatched path; only the gate's own allow-list passes without a token.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(form_routes())
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn form_routes() -> Router<AppState> {
    Router::new()
        // Token acquisition (allow-listed in the gate)
        .route("/api/form/auth", post(auth::authenticate))
        // Gated form intake
        .route("/api/form/submit", post(form::submit))
        .route("/api/form/submissions", get(form::submissions))
}

async fn root() -> &'static str {
    "API is running ✅"
}

pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Formgate API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
