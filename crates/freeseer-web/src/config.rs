use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7079";

pub struct ApiServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_allow_all: bool,
    /// Profile to serve; `None` is the default profile
    pub profile: Option<String>,
}

impl ApiServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("FREESEER_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind_addr))?;

        let cors_allow_all = std::env::var("FREESEER_CORS_ALLOW_ALL")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let profile = std::env::var("FREESEER_PROFILE")
            .ok()
            .filter(|p| !p.is_empty());

        Ok(Self {
            bind_addr,
            cors_allow_all,
            profile,
        })
    }
}
