#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod player;
pub mod prelude;

#[cfg(feature = "std")]
pub mod client;
#[cfg(feature = "std")]
mod config;
#[cfg(feature = "std")]
pub mod engine;
#[cfg(feature = "std")]
pub mod hub;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::*;
pub use player::*;

#[cfg(feature = "std")]
pub use client::Client;
#[cfg(feature = "std")]
pub use config::*;
#[cfg(feature = "std")]
pub use engine::{Engine, EngineHandle, Inbound};
#[cfg(feature = "std")]
pub use hub::Hub;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::*;
#[cfg(feature = "std")]
pub use sim::{play, simulate, MatchResult, SimReport};
#[cfg(feature = "std")]
pub use transport::{local::LocalTransport, tcp::TcpTransport, Transport};
