use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Interface to bind the HTTP listener on
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host = match env::var("HOST") {
            Ok(h) if !h.trim().is_empty() => h
                .trim()
                .parse()
                .with_context(|| format!("HOST {:?} is not an IP address", h))?,
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match env::var("PORT") {
            Ok(p) if !p.trim().is_empty() => p
                .trim()
                .parse()
                .with_context(|| format!("PORT {:?} is not a valid port", p))?,
            _ => 8080,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_combines_host_and_port() {
        let config = Config {
            database_url: "postgres://localhost/test".to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9000,
        };
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:9000");
    }
}
