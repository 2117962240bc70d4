//! Gateway response payloads.
//!
//! # Responsibilities
//! - Define the capability every gateway payload satisfies
//! - REST API (payload v1) response with multi-value headers
//! - HTTP API (payload v2) response with cookies
//!
//! # Design Decisions
//! - Payloads are plain data, built once and never mutated
//! - Empty collections and unset flags are omitted from the JSON

use serde::{Deserialize, Serialize};

use crate::http::headers::{MultiValueHeaders, SingleValueHeaders};

/// A gateway payload constructible from a transcoded HTTP response.
pub trait ApiResponse: Sized {
    fn from_parts(
        status_code: u16,
        headers: Option<SingleValueHeaders>,
        multi_value_headers: Option<MultiValueHeaders>,
        body: Option<String>,
        is_base64_encoded: Option<bool>,
    ) -> Self;
}

/// Response for an API Gateway REST API (proxy integration, payload v1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<SingleValueHeaders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_value_headers: Option<MultiValueHeaders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl ApiResponse for ApiGatewayProxyResponse {
    fn from_parts(
        status_code: u16,
        headers: Option<SingleValueHeaders>,
        multi_value_headers: Option<MultiValueHeaders>,
        body: Option<String>,
        is_base64_encoded: Option<bool>,
    ) -> Self {
        Self {
            status_code,
            headers,
            multi_value_headers,
            body,
            is_base64_encoded,
        }
    }
}

const SET_COOKIE: &str = "set-cookie";

/// Response for an API Gateway HTTP API (payload v2).
///
/// The v2 format has no multi-value header map: `Set-Cookie` values go to
/// `cookies` and other repeated headers are joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayV2Response {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<SingleValueHeaders>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl ApiResponse for ApiGatewayV2Response {
    fn from_parts(
        status_code: u16,
        headers: Option<SingleValueHeaders>,
        multi_value_headers: Option<MultiValueHeaders>,
        body: Option<String>,
        is_base64_encoded: Option<bool>,
    ) -> Self {
        let mut merged = headers.unwrap_or_default();
        let mut cookies = Vec::new();

        if let Some(cookie) = merged.remove(SET_COOKIE) {
            cookies.push(cookie);
        }

        for (name, values) in multi_value_headers.unwrap_or_default() {
            if name.eq_ignore_ascii_case(SET_COOKIE) {
                cookies.extend(values);
            } else {
                merged.insert(name, values.join(", "));
            }
        }

        Self {
            status_code,
            headers: (!merged.is_empty()).then_some(merged),
            cookies,
            body,
            is_base64_encoded,
        }
    }
}
