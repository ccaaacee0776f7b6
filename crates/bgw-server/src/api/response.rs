//! Response encodings
//!
//! Successful responses are either `application/json` or
//! `text/tab-separated-values`. Batch endpoints also report how many keyed
//! lookups failed, since failures and misses are both `null` in the body.

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::batch::{BatchSummary, Lookup};
use crate::projector::Projection;

/// Number of keyed lookups in a batch that failed upstream
pub const LOOKUP_FAILURES_HEADER: &str = "x-lookup-failures";

pub const TSV_CONTENT_TYPE: &str = "text/tab-separated-values; charset=utf-8";

impl IntoResponse for Projection {
    fn into_response(self) -> Response {
        match self {
            Projection::Json(value) => (StatusCode::OK, Json(value)).into_response(),
            Projection::Tsv(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, HeaderValue::from_static(TSV_CONTENT_TYPE))],
                body,
            )
                .into_response(),
        }
    }
}

/// A projected batch result plus its failure count
#[derive(Debug)]
pub struct BatchResponse {
    pub body: Projection,
    pub failures: usize,
}

impl BatchResponse {
    /// Project lookups, counting failures before they collapse into `null`
    pub fn from_lookups<T>(lookups: Vec<Lookup<T>>, project: impl FnOnce(Vec<Option<T>>) -> Projection) -> Self {
        let failures = BatchSummary::of(&lookups).failed;
        let body = project(lookups.into_iter().map(Lookup::into_option).collect());
        Self { body, failures }
    }
}

impl IntoResponse for BatchResponse {
    fn into_response(self) -> Response {
        let mut response = self.body.into_response();
        response.headers_mut().insert(
            HeaderName::from_static(LOOKUP_FAILURES_HEADER),
            HeaderValue::from(self.failures),
        );
        response
    }
}
