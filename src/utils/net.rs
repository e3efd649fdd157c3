use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

const CLIENT_IP_HEADERS: [&str; 5] = [
    "CF-Connecting-IP",    // Cloudflare
    "X-Real-IP",           // Nginx
    "X-Forwarded-For",     // Standard proxy header
    "X-Client-IP",         // Apache
    "X-Cluster-Client-IP", // Cluster
];

/// Best guess at the caller's address: proxy headers first, then the peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    for header_name in CLIENT_IP_HEADERS {
        if let Some(ip_str) = headers.get(header_name).and_then(|v| v.to_str().ok()) {
            // X-Forwarded-For can carry a chain, the first hop is the client
            let ip = ip_str.split(',').next().unwrap_or(ip_str).trim();
            if ip.parse::<IpAddr>().is_ok() {
                return Some(ip.to_string());
            }
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
