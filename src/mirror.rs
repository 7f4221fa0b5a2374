//! Forwarding requests to the remote mirror, a raw-content host serving the briefing site's
//! repository.

use axum::{
    body::Body,
    extract::Request,
    http::{Uri, Version},
    response::Response,
};
use hyper_tls::{native_tls, HttpsConnector};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use url::Url;

use crate::Error;

/// The origin the mirrored pages are fetched from.
pub const DEFAULT_ORIGIN: &str =
    "https://raw.githubusercontent.com/zhongyi-byte/life-briefing/main/";

/// Request headers scoped to the inbound connection. The outbound client derives its own.
const CONNECTION_HEADERS: [&str; 8] = [
    "host",
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// A client for the remote mirror.
#[derive(Clone, Debug)]
pub struct Mirror {
    /// The HTTP client requests are forwarded through. It adds no headers of its own besides
    /// `Host` and body framing, and never follows redirects or decodes bodies.
    client: Client<HttpsConnector<HttpConnector>, Body>,

    /// The URL remote paths are joined to. Always ends with `/`.
    origin: Url,
}

impl Mirror {
    /// Constructs a [`Mirror`] for an origin URL. The origin's path is treated as a directory even
    /// without a trailing slash.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend can't be initialized.
    pub fn new(mut origin: Url) -> Result<Self, native_tls::Error> {
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }

        let mut http = HttpConnector::new();
        http.enforce_http(false);

        let tls = native_tls::TlsConnector::new()?;
        let client =
            Client::builder(TokioExecutor::new()).build(HttpsConnector::from((http, tls.into())));

        Ok(Self { client, origin })
    }

    /// Gets the origin URL remote paths are joined to.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Builds the URL of a resource on the mirror from its path relative to the origin.
    ///
    /// # Errors
    ///
    /// Fails if the joined URL is invalid.
    pub fn target(&self, remote_path: &str) -> Result<Url, url::ParseError> {
        self.origin.join(remote_path)
    }

    /// Reissues a request against a resource on the mirror, keeping its method, headers, and body,
    /// and returns the mirror's response unmodified.
    ///
    /// # Errors
    ///
    /// See [`Error::Url`], [`Error::Uri`], and [`Error::Forward`].
    pub async fn forward(&self, request: Request, remote_path: &str) -> Result<Response, Error> {
        let target = self.target(remote_path)?;
        let (mut parts, body) = request.into_parts();

        for name in CONNECTION_HEADERS {
            parts.headers.remove(name);
        }

        tracing::debug!(method = %parts.method, %target, "forwarding to the remote mirror");

        parts.uri = target.as_str().parse::<Uri>()?;
        // The inbound request may have been HTTP/2; the mirror connection is negotiated anew.
        parts.version = Version::HTTP_11;

        let remote = self.client.request(Request::from_parts(parts, body)).await?;

        Ok(remote.map(Body::new))
    }
}
