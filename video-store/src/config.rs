//! Service configuration

use std::net::SocketAddr;

/// Configuration of one video store process
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP listen address
    pub listen: SocketAddr,
    /// Start with the demo videos instead of an empty store
    pub seed_demo_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_demo_data: false,
        }
    }
}
