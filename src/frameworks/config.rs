use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;

pub fn http_port() -> u16 {
    env::var("SNAKE_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

pub fn http_host() -> IpAddr {
    env::var("SNAKE_SERVER_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn bind_address() -> SocketAddr {
    SocketAddr::new(http_host(), http_port())
}
