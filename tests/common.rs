//! Common code for integration tests

use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};

use anyhow::Error;
use axum::{
    body::{self, Body, Bytes},
    extract::Request,
    http::{HeaderMap, Method},
    response::Response,
    Router,
};
use briefing_edge::{app, Assets, Env, Mirror};
use tower::{service_fn, ServiceExt};

/// A request as the stub static-asset binding received it.
#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Every request the stub static-asset binding received, in order.
#[derive(Clone, Default, Debug)]
pub struct AssetCalls(Arc<Mutex<Vec<SeenRequest>>>);

impl AssetCalls {
    pub fn take(&self) -> Vec<SeenRequest> {
        std::mem::take(&mut *self.0.lock().expect("asset calls shouldn't be poisoned"))
    }
}

/// Binds a stub static-asset backend which records each request and answers with
/// `asset: <path>`.
pub fn stub_assets(calls: AssetCalls) -> Assets {
    Assets::new(service_fn(move |request: Request| {
        let calls = calls.clone();

        async move {
            let (parts, body) = request.into_parts();
            let body = body::to_bytes(body, usize::MAX)
                .await
                .expect("request body should be readable");

            calls
                .0
                .lock()
                .expect("asset calls shouldn't be poisoned")
                .push(SeenRequest {
                    method: parts.method,
                    uri: parts.uri.to_string(),
                    headers: parts.headers,
                    body,
                });

            let mut response = Response::new(Body::from(format!("asset: {}", parts.uri.path())));
            response
                .headers_mut()
                .insert("x-served-by", "assets".parse().expect("header should be valid"));

            Ok::<_, Infallible>(response)
        }
    }))
}

/// Builds the app with the stub static assets and a mirror at `mirror_origin`.
pub fn stub_app(mirror_origin: &str, calls: AssetCalls) -> Result<Router, Error> {
    let env = Env {
        assets: stub_assets(calls),
        mirror: Mirror::new(mirror_origin.parse()?)?,
    };

    Ok(app(env))
}

/// Sends a request through the app, returning the response with its body collected.
pub async fn send(app: Router, request: Request) -> Result<(Response<()>, Bytes), Error> {
    let response = app.oneshot(request).await?;
    let (parts, body) = response.into_parts();
    let body = body::to_bytes(body, usize::MAX).await?;

    Ok((Response::from_parts(parts, ()), body))
}
