//! Minimal HTTPS client for JSON POST requests.
//!
//! Wraps hyper-util's pooled client with a rustls connector. Plain `http`
//! origins are accepted too so tests can target a local listener.

use std::fmt;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::GatewayError;

/// Pooled HTTP/1.1 client shared by all calls of one gateway instance.
#[derive(Clone)]
pub(crate) struct ApiClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl ApiClient {
    pub(crate) fn new() -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self { inner: Client::builder(TokioExecutor::new()).build(connector) }
    }

    /// POST a JSON body and return the status with the collected response body.
    ///
    /// # Errors
    /// Returns [`GatewayError::Transport`] on connection, protocol or body
    /// read errors. The status is not checked here.
    pub(crate) async fn post_json(
        &self,
        uri: &Uri,
        authorization: &HeaderValue,
        body: Vec<u8>,
    ) -> Result<(StatusCode, Bytes), GatewayError> {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri.clone())
            .header(AUTHORIZATION, authorization.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| GatewayError::Transport(format!("build request: {e}")))?;

        let resp = self
            .inner
            .request(req)
            .await
            .map_err(|e| GatewayError::Transport(format!("send request to {uri}: {e}")))?;

        let status = resp.status();
        let body_bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| GatewayError::Transport(format!("read response body: {e}")))?
            .to_bytes();

        Ok((status, body_bytes))
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
