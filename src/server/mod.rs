//! HTTP server

pub mod redirect;
pub mod session;

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{build_listings, ContentRegistry};
use crate::helpers::full_url_for;
use crate::routes::{site_routes, MatchedRoute, RouteDef, RouteHandle};
use crate::server::redirect::{parse_legacy_path, redirect_target};
use crate::server::session::{current_user, CurrentUser};
use crate::shell::PageShell;
use crate::Folio;

/// Shared server state. The registry is loaded once and read-only after, so
/// handlers can share it without locking.
struct ServerState {
    folio: Folio,
    registry: ContentRegistry,
    shell: PageShell,
    routes: RouteDef,
}

/// Start the site server
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    let registry = folio.load_registry()?;
    tracing::info!("Loaded {} content item(s)", registry.len());

    let shell = PageShell::new(folio.config.clone())?;

    let state = Arc::new(ServerState {
        folio: folio.clone(),
        registry,
        shell,
        routes: site_routes(),
    });

    let app = Router::new()
        .route("/", get(home_handler))
        .route("/blog", get(blog_index_handler))
        .route("/blog/:slug", get(post_handler))
        .route("/manifest.json", get(manifest_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home_handler(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    let user = current_user(&headers);
    let chain = state.routes.match_chain("/").unwrap_or_default();
    page_response(state.shell.render_home(&chain, &user))
}

async fn blog_index_handler(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    let user = current_user(&headers);
    let chain = state.routes.match_chain("/blog").unwrap_or_default();
    let listings = build_listings(&state.registry, &state.folio.config.listings);
    page_response(state.shell.render_blog_index(&listings, &chain, &user))
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let user = current_user(&headers);
    let path = format!("/blog/{}", slug);
    let mut chain = state.routes.match_chain(&path).unwrap_or_default();

    let Some(item) = state.registry.get(&slug) else {
        // A dangling listing reference ends up here
        return not_found_response(&state, &path, &chain, &user);
    };

    // A post may declare its own background in front-matter; it becomes the
    // innermost handle and wins over any section declaration.
    if let Some(background) = item.attributes.get("background") {
        if let Some(leaf) = chain.last_mut() {
            leaf.handle = Some(RouteHandle::background(background));
        }
    }

    let canonical = full_url_for(&state.folio.config, &path);
    page_response(state.shell.render_post(item, &canonical, &chain, &user))
}

async fn manifest_handler(State(state): State<Arc<ServerState>>) -> Response {
    let config = &state.folio.config;
    let manifest = serde_json::json!({
        "name": config.title,
        "short_name": config.title,
        "start_url": "/",
        "display": "standalone",
        "background_color": config.default_background,
    });
    (
        [(header::CONTENT_TYPE, "application/json")],
        manifest.to_string(),
    )
        .into_response()
}

/// Fallback: legacy dated URLs first, then bare content identifiers, then
/// static assets, then the 404 page.
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();
    let user = current_user(request.headers());

    // Old dated URLs redirect permanently to the slug route. The date parts
    // are positional and unvalidated; an empty slug passes through.
    if let Some(legacy) = parse_legacy_path(&path) {
        return moved_permanently(&redirect_target(&legacy));
    }

    // Blog index cards link to "/{identifier}"; send a known identifier on
    // to its canonical post URL.
    let bare = path.trim_matches('/');
    if !bare.is_empty() && !bare.contains('/') && state.registry.get(bare).is_some() {
        return moved_permanently(&format!("/blog/{}", bare));
    }

    // Static assets
    let mut service = ServeDir::new(&state.folio.static_dir);
    if let Ok(response) = service.try_call(request).await {
        if response.status() != StatusCode::NOT_FOUND {
            return response.into_response();
        }
    }

    not_found_response(&state, &path, &[], &user)
}

/// A 301 with the given location
fn moved_permanently(location: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

fn page_response(rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render error").into_response()
        }
    }
}

fn not_found_response(
    state: &ServerState,
    path: &str,
    chain: &[MatchedRoute],
    user: &CurrentUser,
) -> Response {
    match state.shell.render_not_found(path, chain, user) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_permanently_response() {
        let response = moved_permanently("/blog/my-post");
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/blog/my-post"
        );
    }

    #[test]
    fn test_legacy_redirects_map_to_the_slug_route() {
        let legacy = parse_legacy_path("/2021/03/15/my-post").unwrap();
        assert_eq!(redirect_target(&legacy), "/blog/my-post");

        // An empty slug passes through to the degenerate target
        let legacy = parse_legacy_path("/2021/03/15/").unwrap();
        assert_eq!(redirect_target(&legacy), "/blog/");
    }
}
