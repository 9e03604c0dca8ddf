use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, ResponseError, web};
use std::time::Duration;

use crate::error::AppError;

/// Upper bound on the time spent serving one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(Duration::from_secs(30))
    }
}

/// Answer 504 once a request runs past the configured [`RequestTimeout`].
///
/// Register with `actix_web::middleware::from_fn(request_timeout)`. Dropping the
/// inner future releases any pooled connection it held.
pub async fn request_timeout<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let limit = req
        .app_data::<web::Data<RequestTimeout>>()
        .map(|timeout| *timeout.get_ref())
        .unwrap_or_default()
        .0;
    let http_req = req.request().clone();

    match tokio::time::timeout(limit, next.call(req)).await {
        Ok(response) => response.map(ServiceResponse::map_into_left_body),
        Err(_) => {
            tracing::warn!(
                path = http_req.path(),
                timeout_ms = limit.as_millis() as u64,
                "request timed out"
            );
            let response = AppError::Timeout(limit).error_response();
            Ok(ServiceResponse::new(http_req, response).map_into_right_body())
        }
    }
}
