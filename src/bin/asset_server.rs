//! Static file server for the web build of the timeline.
//!
//! Serves `public/` first and falls back to `src/` so sources can be loaded
//! directly during development.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
};
use clap::Parser;
use http::{StatusCode, Uri, header};
use percent_encoding::percent_decode_str;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::{Component, Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Directories searched in order for every request.
const SEARCH_DIRS: [&str; 2] = ["public", "src"];

#[derive(Parser, Debug)]
#[command(name = "asset_server")]
#[command(about = "Serve the historical timeline's static assets")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Directory containing `public/` and `src/`
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Clone)]
struct ServerState {
    root: PathBuf,
}

/// Map a request path to a path relative to a search directory.
///
/// Returns `None` for paths that would escape it.
fn resolve_request_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let trimmed = decoded.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    let mut resolved = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if resolved.as_os_str().is_empty() {
        return None;
    }
    Some(resolved)
}

fn content_type_for(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ts" | "tsx") => "application/typescript".to_string(),
        Some("js") => "application/javascript".to_string(),
        _ => mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("text/plain")
            .to_string(),
    }
}

async fn serve_asset(State(state): State<ServerState>, uri: Uri) -> Response {
    let Some(relative) = resolve_request_path(uri.path()) else {
        warn!(path = uri.path(), "rejected request path");
        return not_found();
    };

    for dir in SEARCH_DIRS {
        let candidate = state.root.join(dir).join(&relative);
        match tokio::fs::metadata(&candidate).await {
            Ok(_) => return read_file(&candidate).await,
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                debug!(path = %candidate.display(), "skipping unreadable candidate: {err}");
                continue;
            }
        }
    }
    not_found()
}

async fn read_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(content) => ([(header::CONTENT_TYPE, content_type_for(path))], content).into_response(),
        Err(err) => {
            error!(path = %path.display(), "failed to read file: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading file").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(serve_asset)
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { root })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let addr = SocketAddr::new(cli.host, cli.port);

    info!("Serving assets from: {}", cli.root.display());

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!("Server running at http://localhost:{}", cli.port);

    if let Err(err) = axum::serve(listener, router(cli.root)).await {
        error!("Server error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new() -> Self {
            let path = std::env::temp_dir()
                .join(format!("historical-timeline-assets-{}", uuid::Uuid::new_v4()));
            fs::create_dir_all(path.join("public")).unwrap();
            fs::create_dir_all(path.join("src").join("data")).unwrap();
            Self(path)
        }

        fn write(&self, relative: &str, content: &str) {
            fs::write(self.0.join(relative), content).unwrap();
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    async fn get(root: &TempRoot, path: &'static str) -> (StatusCode, Option<String>, String) {
        let state = ServerState { root: root.0.clone() };
        let response = serve_asset(State(state), Uri::from_static(path)).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_root_maps_to_index() {
        assert_eq!(resolve_request_path("/"), Some(PathBuf::from("index.html")));
        assert_eq!(
            resolve_request_path("/data/timeline%20data.json"),
            Some(PathBuf::from("data/timeline data.json"))
        );
    }

    #[test]
    fn test_parent_components_rejected() {
        assert_eq!(resolve_request_path("/../secret.txt"), None);
        assert_eq!(resolve_request_path("/data/%2E%2E/%2E%2E/secret.txt"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("app.tsx")), "application/typescript");
        assert_eq!(content_type_for(Path::new("utils.ts")), "application/typescript");
        assert_eq!(content_type_for(Path::new("main.js")), "application/javascript");
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("NOTES")), "text/plain");
    }

    #[tokio::test]
    async fn test_serves_index_from_public() {
        let root = TempRoot::new();
        root.write("public/index.html", "<h1>timeline</h1>");

        let (status, content_type, body) = get(&root, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert_eq!(body, "<h1>timeline</h1>");
    }

    #[tokio::test]
    async fn test_falls_back_to_src() {
        let root = TempRoot::new();
        root.write("src/data/events.ts", "export const events = [];");

        let (status, content_type, body) = get(&root, "/data/events.ts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/typescript"));
        assert_eq!(body, "export const events = [];");
    }

    #[tokio::test]
    async fn test_public_wins_over_src() {
        let root = TempRoot::new();
        root.write("public/app.js", "public");
        root.write("src/app.js", "src");

        let (status, content_type, body) = get(&root, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/javascript"));
        assert_eq!(body, "public");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let root = TempRoot::new();
        let (status, _, body) = get(&root, "/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_traversal_is_404() {
        let root = TempRoot::new();
        root.write("public/index.html", "ok");
        let (status, _, _) = get(&root, "/../public/index.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreadable_entry_is_500() {
        let root = TempRoot::new();
        // A directory exists at the path but cannot be read as a file.
        fs::create_dir_all(root.0.join("public").join("folder")).unwrap();
        let (status, _, body) = get(&root, "/folder").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error reading file");
    }
}
