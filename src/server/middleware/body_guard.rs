//! Body guard middleware
//!
//! Buffers JSON and urlencoded request bodies up front so that oversized or
//! malformed bodies are rejected before routing. Multipart and other bodies
//! pass through untouched.

use crate::utils::error::RelayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{HttpMessage, ResponseError};
use bytes::BytesMut;
use futures::StreamExt;
use futures::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::warn;

/// Body kinds the guard inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedBody {
    Json,
    UrlEncoded,
}

impl GuardedBody {
    /// Classify a request by its `Content-Type` essence
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "application/json" => Some(Self::Json),
            "application/x-www-form-urlencoded" => Some(Self::UrlEncoded),
            _ => None,
        }
    }
}

/// Strict JSON check: the document must be an object or an array
pub fn is_valid_json_body(body: &[u8]) -> bool {
    let first = body.iter().find(|b| !b.is_ascii_whitespace());
    match first {
        None => true,
        Some(b'{') | Some(b'[') => {
            serde_json::from_slice::<serde::de::IgnoredAny>(body).is_ok()
        }
        Some(_) => false,
    }
}

/// Middleware rejecting oversized (413) and malformed JSON (400) bodies
#[derive(Debug, Clone)]
pub struct BodyGuard {
    limit: usize,
}

impl BodyGuard {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BodyGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BodyGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BodyGuardService {
            service: Rc::new(service),
            limit: self.limit,
        }))
    }
}

/// Service implementation for [`BodyGuard`]
pub struct BodyGuardService<S> {
    service: Rc<S>,
    limit: usize,
}

impl<S, B> Service<ServiceRequest> for BodyGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let Some(kind) = GuardedBody::from_content_type(req.content_type()) else {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        };

        let service = Rc::clone(&self.service);
        let limit = self.limit;

        Box::pin(async move {
            if declared_length(&req).is_some_and(|len| len > limit) {
                return Ok(reject(req, RelayError::PayloadTooLarge));
            }

            let mut payload = req.take_payload();
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk?;
                if body.len() + chunk.len() > limit {
                    return Ok(reject(req, RelayError::PayloadTooLarge));
                }
                body.extend_from_slice(&chunk);
            }

            if kind == GuardedBody::Json && !is_valid_json_body(&body) {
                return Ok(reject(req, RelayError::InvalidJson));
            }

            req.set_payload(Payload::from(body.freeze()));
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn declared_length(req: &ServiceRequest) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn reject<B>(req: ServiceRequest, error: RelayError) -> ServiceResponse<EitherBody<B>> {
    warn!(
        method = %req.method(),
        path = %req.path(),
        error = %error,
        "Request body rejected"
    );
    req.into_response(error.error_response())
        .map_into_right_body()
}
