//! Tower adapter producing gateway payloads.
//!
//! Wraps an HTTP service (an axum `Router`, a hyper handler) so that each call
//! runs the inner service and transcodes its response. This is the surface the
//! Lambda event adapter drives.

use std::fmt;
use std::marker::PhantomData;
use std::task::{Context, Poll};

use axum::body::{Bytes, HttpBody};
use axum::http::{Request, Response};
use axum::BoxError;
use futures_util::future::BoxFuture;
use thiserror::Error;
use tower::{Layer, Service};

use crate::error::TranscodeError;
use crate::gateway::ApiResponse;
use crate::http::ResponseTranscoder;

/// Errors from a [`GatewayService`] call.
#[derive(Debug, Error)]
pub enum GatewayServiceError<E> {
    /// The wrapped HTTP service failed before producing a response.
    #[error("inner service failed: {0}")]
    Inner(E),

    /// The response was produced but its body could not be drained.
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
}

/// Service returning gateway payloads `R` instead of HTTP responses.
pub struct GatewayService<S, R> {
    inner: S,
    transcoder: ResponseTranscoder,
    _payload: PhantomData<fn() -> R>,
}

impl<S, R> GatewayService<S, R> {
    pub fn new(inner: S) -> Self {
        Self::with_transcoder(inner, ResponseTranscoder::default())
    }

    pub fn with_transcoder(inner: S, transcoder: ResponseTranscoder) -> Self {
        Self {
            inner,
            transcoder,
            _payload: PhantomData,
        }
    }
}

impl<S: Clone, R> Clone for GatewayService<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            transcoder: self.transcoder.clone(),
            _payload: PhantomData,
        }
    }
}

impl<S: fmt::Debug, R> fmt::Debug for GatewayService<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayService")
            .field("inner", &self.inner)
            .field("transcoder", &self.transcoder)
            .finish()
    }
}

impl<S, R, ReqBody, ResBody> Service<Request<ReqBody>> for GatewayService<S, R>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: HttpBody<Data = Bytes> + Send + 'static,
    ResBody::Error: Into<BoxError>,
    R: ApiResponse + Send + 'static,
{
    type Response = R;
    type Error = GatewayServiceError<S::Error>;
    type Future = BoxFuture<'static, Result<R, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(GatewayServiceError::Inner)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let future = self.inner.call(request);
        let transcoder = self.transcoder.clone();

        Box::pin(async move {
            let response = future.await.map_err(GatewayServiceError::Inner)?;
            tracing::trace!(method = %method, path = %path, status = %response.status(), "Inner service responded");
            let payload = transcoder.transcode::<R, ResBody>(response).await?;
            Ok::<R, GatewayServiceError<S::Error>>(payload)
        })
    }
}

/// Layer wrapping services in [`GatewayService`].
pub struct GatewayLayer<R> {
    transcoder: ResponseTranscoder,
    _payload: PhantomData<fn() -> R>,
}

impl<R> GatewayLayer<R> {
    pub fn new(transcoder: ResponseTranscoder) -> Self {
        Self {
            transcoder,
            _payload: PhantomData,
        }
    }
}

impl<R> Default for GatewayLayer<R> {
    fn default() -> Self {
        Self::new(ResponseTranscoder::default())
    }
}

impl<R> Clone for GatewayLayer<R> {
    fn clone(&self) -> Self {
        Self::new(self.transcoder.clone())
    }
}

impl<S, R> Layer<S> for GatewayLayer<R> {
    type Service = GatewayService<S, R>;

    fn layer(&self, inner: S) -> Self::Service {
        GatewayService::with_transcoder(inner, self.transcoder.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ApiGatewayProxyResponse;
    use axum::body::Body;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    #[tokio::test]
    async fn test_wraps_service_fn() {
        let inner = service_fn(|_req: Request<Body>| async {
            Ok::<_, Infallible>(
                Response::builder()
                    .header("content-type", "application/json")
                    .body(Body::from("{\"ok\":true}"))
                    .unwrap(),
            )
        });

        let out: ApiGatewayProxyResponse = GatewayService::new(inner)
            .oneshot(Request::new(Body::empty()))
            .await
            .unwrap();

        assert_eq!(out.status_code, 200);
        assert_eq!(out.body.as_deref(), Some("{\"ok\":true}"));
    }

    #[tokio::test]
    async fn test_inner_error_is_wrapped() {
        let inner = service_fn(|_req: Request<Body>| async {
            Err::<Response<Body>, _>(std::io::Error::other("upstream gone"))
        });

        let err = GatewayService::<_, ApiGatewayProxyResponse>::new(inner)
            .oneshot(Request::new(Body::empty()))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayServiceError::Inner(_)));
        assert_eq!(err.to_string(), "inner service failed: upstream gone");
    }
}
