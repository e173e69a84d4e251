//! Development server with hot reload.
//!
//! Watches the content file and regenerates the site on change; watches the
//! output directory and reloads connected browsers.

use std::path::{Path, PathBuf};

use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;
use tracing::{error, info};

use crate::content::SiteContent;
use crate::render;

/// Regenerate the site from the content file.
fn rebuild(content_path: &Path, output: &Path) -> anyhow::Result<()> {
    let content = SiteContent::from_path(content_path)?;
    render::render(&content, output)?;
    Ok(())
}

/// Start the development server with hot reload.
pub async fn serve(content_path: &Path, output: &Path, port: u16) -> anyhow::Result<()> {
    // Generate the initial site
    rebuild(content_path, output)?;
    info!(output = %output.display(), "generated initial site");

    // Channel for content change notifications
    let (tx, mut rx) = mpsc::channel::<()>(1);

    let mut content_watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() || event.kind.is_create() {
                let _ = tx.blocking_send(());
            }
        }
    })?;

    // Watch the content file's parent directory
    let watch_path = content_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    content_watcher.watch(&watch_path, RecursiveMode::NonRecursive)?;

    // Regeneration task
    let content_for_rebuild = content_path.to_path_buf();
    let output_for_rebuild = output.to_path_buf();
    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // Let rapid successive saves settle before rebuilding
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            // Drain any additional notifications
            while rx.try_recv().is_ok() {}

            match rebuild(&content_for_rebuild, &output_for_rebuild) {
                Ok(()) => info!("regenerated site"),
                Err(e) => error!("error regenerating: {e}"),
            }
        }
    });

    // Reload the browser whenever the output directory changes
    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let mut output_watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() || event.kind.is_create() {
                reloader.reload();
            }
        }
    })?;
    output_watcher.watch(output, RecursiveMode::Recursive)?;

    let app = Router::new()
        .fallback_service(ServeDir::new(output))
        .layer(livereload);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("development server running at http://localhost:{port}");
    info!(content = %content_path.display(), "watching for changes");

    // Keep watchers alive
    let _content_watcher = content_watcher;
    let _output_watcher = output_watcher;

    axum::serve(listener, app).await?;

    Ok(())
}
