use std::net::UdpSocket;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Server status echo returned by the health endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    pub timestamp: String,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct HealthQuery {
    pub echo: Option<String>,
}

impl Health {
    pub fn now(echo: Option<String>, path_echo: Option<String>) -> Self {
        Health {
            status: 200,
            status_message: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ip_address: local_ip(),
            echo,
            path_echo,
        }
    }
}

// Routable local address, discovered without sending any traffic. Falls back
// to loopback when the host has no route.
fn local_ip() -> String {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|_| "127.0.0.1".to_string())
}

// ----------------------------- TESTS --------------------------------
