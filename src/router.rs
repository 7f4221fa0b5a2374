//! The request router: mirrors a few well-known pages and serves everything else from the static
//! assets.

use axum::{
    extract::{Request, State},
    response::Response,
    Router,
};
use axum_macros::debug_handler;
use tower_http::trace::TraceLayer;

use crate::{Assets, Error, Mirror, Route};

/// The capabilities the router depends on.
#[derive(Clone, Debug)]
pub struct Env {
    /// The static-asset binding, for any request that isn't mirrored.
    pub assets: Assets,

    /// The remote mirror, for the well-known pages.
    pub mirror: Mirror,
}

/// Builds the app serving every request through [`handle`].
pub fn app(env: Env) -> Router {
    Router::new()
        .fallback(handle)
        .with_state(env)
        .layer(TraceLayer::new_for_http())
}

/// Handles all incoming requests, either forwarding them to the remote mirror or delegating them
/// to the static assets based on the request URI's path.
///
/// # Errors
///
/// See [`Error`]. Nothing is retried, and a failed forward never falls back to the assets.
#[debug_handler]
pub async fn handle(State(env): State<Env>, request: Request) -> Result<Response, Error> {
    match Route::resolve(request.uri().path()) {
        Route::Mirror(remote_path) => env.mirror.forward(request, remote_path).await,
        Route::Assets => {
            tracing::debug!(path = request.uri().path(), "serving from the static assets");

            env.assets.fetch(request).await
        }
    }
}
