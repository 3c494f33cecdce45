use axum::{
    extract::Request,
    http::header,
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

/// Cookie checked by the navigation guard. The auth view sets it after a
/// successful login; its value is never verified here.
pub const SESSION_COOKIE: &str = "request_token";

const HOME_PATH: &str = "/";
const AUTH_PATH: &str = "/auth";

pub fn app() -> Router {
    Router::new()
        .route(HOME_PATH, get(home_view))
        .route(AUTH_PATH, get(auth_view))
        .layer(middleware::from_fn(navigation_guard))
        .layer(TraceLayer::new_for_http())
}

/// UX-only guard: pick the view based on whether the session cookie is set.
/// Real access control lives on the API; this only routes the browser.
async fn navigation_guard(request: Request, next: Next) -> Response {
    let authed = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| cookie_value(cookies, SESSION_COOKIE))
        // An empty cookie value does not count as a session
        .map_or(false, |value| !value.is_empty());

    match (request.uri().path(), authed) {
        (HOME_PATH, false) => Redirect::temporary(AUTH_PATH).into_response(),
        (AUTH_PATH, true) => Redirect::temporary(HOME_PATH).into_response(),
        _ => next.run(request).await,
    }
}

/// Value of the named cookie within a Cookie header, if present.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value.to_string()),
            _ => None,
        }
    })
}

async fn home_view() -> Html<&'static str> {
    Html(HOME_VIEW)
}

async fn auth_view() -> Html<&'static str> {
    Html(AUTH_VIEW)
}

const HOME_VIEW: &str = r#"<!doctype html>
<html>
  <head><title>Formgate</title></head>
  <body>
    <h1>Home</h1>
    <p>You are signed in. Submit forms via POST /api/form/submit on the API.</p>
  </body>
</html>
"#;

const AUTH_VIEW: &str = r#"<!doctype html>
<html>
  <head><title>Formgate - Sign in</title></head>
  <body>
    <h1>Sign in</h1>
    <p>POST your credentials to /api/form/auth on the API, then store the
    returned token in the request_token cookie to reach the home view.</p>
  </body>
</html>
"#;

pub async fn serve(port: u16) -> anyhow::Result<()> {
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Formgate web listening on http://{}", bind_addr);

    axum::serve(listener, app()).await?;

    Ok(())
}
