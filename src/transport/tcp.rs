#![cfg(feature = "std")]

use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::frame::{read_frame, write_frame, MAX_FRAME_SIZE};
use crate::transport::Transport;

/// Default timeout for a single send (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client side of a framed TCP connection.
///
/// Sends are bounded by the timeout; receives wait indefinitely because the
/// server only speaks when the game state changes.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, DEFAULT_TIMEOUT, MAX_FRAME_SIZE)
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self::with_config(stream, timeout_duration, MAX_FRAME_SIZE)
    }

    pub fn with_config(stream: TcpStream, timeout_duration: Duration, max_message_size: u32) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        timeout(
            self.timeout_duration,
            write_frame(&mut self.stream, &msg, self.max_message_size),
        )
        .await
        .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", self.timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        read_frame(&mut self.stream, self.max_message_size).await
    }
}
