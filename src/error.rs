//! See [`Error`].

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, uri::InvalidUri, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    BoxError,
};
use thiserror::Error;

/// A failure handling a request. Nothing is recovered locally; the error is answered with a plain
/// status response instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request to the remote mirror failed.
    #[error("failed to fetch from the remote mirror: {0}")]
    Forward(#[from] hyper_util::client::legacy::Error),

    /// The remote mirror's target URL couldn't be built.
    #[error("invalid remote mirror URL: {0}")]
    Url(#[from] url::ParseError),

    /// The remote mirror's target URL couldn't be used as a request URI.
    #[error("invalid remote mirror URI: {0}")]
    Uri(#[from] InvalidUri),

    /// The static-asset binding failed.
    #[error("static-asset binding failed: {0}")]
    Assets(BoxError),
}

impl Error {
    /// Gets the status code this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Forward(_) => StatusCode::BAD_GATEWAY,
            Self::Url(_) | Self::Uri(_) | Self::Assets(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        plain_error(self.status())
    }
}

/// Generates a `text/plain` response containing a status code and its canonical reason text (e.g.
/// `502 Bad Gateway`).
fn plain_error(status: StatusCode) -> Response {
    let mut response = Response::new(Body::from(status.to_string()));

    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    response
}
