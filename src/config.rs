#![cfg(feature = "std")]

use std::env;
use std::time::Duration;

use crate::transport::frame::MAX_FRAME_SIZE;

/// Address used when neither `--bind` (or `SEABATTLE_BIND`) nor `PORT` is given.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Default bound on writing one frame to a client.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime settings of the TCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub max_frame_size: u32,
    pub io_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_frame_size: MAX_FRAME_SIZE,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Defaults, listening on all interfaces at `PORT` when it is set.
    pub fn from_env() -> Self {
        let bind = env::var("PORT")
            .map(|port| format!("0.0.0.0:{}", port))
            .unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Self {
            bind,
            ..Self::default()
        }
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }
}
