use axum::extract::ConnectInfo;
use axum::http::header::ToStrError;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;

pub const FORWARDED_FOR: &str = "x-forwarded-for";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub message: String,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Routes mounted under `/api`.
pub fn router() -> Router {
    Router::new().route("/ip", get(ip))
}

/// `GET /api/ip`: the caller's address as the server sees it.
pub async fn ip(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> (StatusCode, Json<ApiResponse>) {
    match client_ip(&headers, addr) {
        Ok(ip) => (StatusCode::OK, Json(ApiResponse::new(ip))),
        Err(e) => {
            log::error!("HTTP: Unreadable {} header: {}", FORWARDED_FOR, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::new("Internal Server Error!")),
            )
        }
    }
}

/// Forwarded-for value if the request has a non-empty one, else the peer ip.
///
/// Repeated headers are joined with `", "`, the way proxies chain them.
pub fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> Result<String, ToStrError> {
    let forwarded = headers
        .get_all(FORWARDED_FOR)
        .iter()
        .map(|value| value.to_str())
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if forwarded.is_empty() {
        Ok(addr.ip().to_string())
    } else {
        Ok(forwarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        SocketAddr::from(([192, 168, 1, 20], 51_234))
    }

    #[tokio::test]
    async fn test_peer_address_without_header() {
        let (status, Json(body)) = ip(ConnectInfo(peer()), HeaderMap::new()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ApiResponse::new("192.168.1.20"));
    }

    #[tokio::test]
    async fn test_forwarded_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));

        let (status, Json(body)) = ip(ConnectInfo(peer()), headers).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_unreadable_header_is_500() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED_FOR,
            HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );

        let (status, Json(body)) = ip(ConnectInfo(peer()), headers).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error!");
    }

    #[test]
    fn test_empty_header_falls_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR, HeaderValue::from_static(""));
        assert_eq!(client_ip(&headers, peer()).unwrap(), "192.168.1.20");

        headers.append(FORWARDED_FOR, HeaderValue::from_static("10.0.0.1"));
        assert_eq!(client_ip(&headers, peer()).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_ipv6_peer() {
        let addr: SocketAddr = "[::1]:8080".parse().unwrap();
        assert_eq!(client_ip(&HeaderMap::new(), addr).unwrap(), "::1");
    }
}
