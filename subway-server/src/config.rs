//! Server configuration.

use std::net::SocketAddr;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `SUBWAY_ADDR` overrides the bind address (e.g. "127.0.0.1:3000").
    /// An unparseable value falls back to the default with a warning.
    pub fn from_env() -> Self {
        match std::env::var("SUBWAY_ADDR") {
            Ok(raw) => match raw.parse() {
                Ok(addr) => Self { addr },
                Err(_) => {
                    eprintln!(
                        "Warning: SUBWAY_ADDR {raw:?} is not a valid socket address. Using default."
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}
