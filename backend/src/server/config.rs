//! Runtime settings loaded via OrthoConfig and the server configuration
//! derived from them.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use pagination::{PageError, PageSize};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("trivia")
        .join("seed.json")
}

/// Settings read from `TRIVIA_*` environment variables, CLI flags and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct TriviaSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Questions per page.
    pub page_size: Option<usize>,
    /// Seed fixture for the in-memory store.
    pub seed_path: Option<PathBuf>,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: Option<bool>,
}

impl TriviaSettings {
    /// Return the configured interface, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return whether logs are emitted as JSON, which is the default.
    pub fn json_logs(&self) -> bool {
        self.json_logs.unwrap_or(true)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured page size, falling back to the library default.
    pub fn page_size(&self) -> Result<PageSize, PageError> {
        self.page_size.map_or(Ok(PageSize::default()), PageSize::new)
    }

    /// Return the configured seed fixture, falling back to the bundled one.
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path.clone().unwrap_or_else(default_seed_path)
    }

    /// Resolve the socket address to bind.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip: IpAddr = self.host().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid TRIVIA_HOST {:?}: {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration for the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
