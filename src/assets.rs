//! See [`Assets`].

use std::{fmt, path::Path};

use axum::{
    body::{Body, Bytes, HttpBody},
    extract::Request,
    http,
    response::Response,
    BoxError,
};
use tower::{util::BoxCloneSyncService, Service, ServiceExt};
use tower_http::services::ServeDir;

use crate::Error;

/// The static-asset binding: an opaque service which serves pre-deployed files for requests the
/// router doesn't mirror.
#[derive(Clone)]
pub struct Assets {
    /// The wrapped service, with its body and error types erased.
    service: BoxCloneSyncService<Request, Response, BoxError>,
}

impl Assets {
    /// Binds any cloneable [`Service`] as the static-asset backend.
    pub fn new<S, B>(service: S) -> Self
    where
        S: Service<Request, Response = http::Response<B>> + Clone + Send + Sync + 'static,
        S::Error: Into<BoxError>,
        S::Future: Send + 'static,
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let service = service
            .map_response(|response: http::Response<B>| response.map(Body::new))
            .map_err(Into::<BoxError>::into);

        Self {
            service: BoxCloneSyncService::new(service),
        }
    }

    /// Binds a directory of files, served the way a static host would (e.g. `/article/sub/` serves
    /// `article/sub/index.html`).
    pub fn from_dir<P: AsRef<Path>>(path: P) -> Self {
        Self::new(ServeDir::new(path))
    }

    /// Passes a request to the static-asset backend and returns its response unmodified.
    ///
    /// # Errors
    ///
    /// See [`Error::Assets`].
    pub async fn fetch(&self, request: Request) -> Result<Response, Error> {
        // Calling a service needs a mutable reference to it, so each request gets its own clone.
        self.service
            .clone()
            .oneshot(request)
            .await
            .map_err(Error::Assets)
    }
}

impl fmt::Debug for Assets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assets").finish_non_exhaustive()
    }
}
