#![cfg(feature = "std")]

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::PlayerId;
use crate::engine::EngineHandle;
use crate::protocol::Message;
use crate::transport::Transport;

/// In-process connection wired straight into an engine. Dropping it is
/// reported to the engine as a disconnect.
#[derive(Debug)]
pub struct LocalTransport {
    player: PlayerId,
    handle: EngineHandle,
    rx: UnboundedReceiver<Message>,
}

impl LocalTransport {
    pub(crate) fn new(player: PlayerId, handle: EngineHandle, rx: UnboundedReceiver<Message>) -> Self {
        Self { player, handle, rx }
    }

    /// Identifier the engine assigned to this connection.
    pub fn player(&self) -> PlayerId {
        self.player
    }
}

#[async_trait::async_trait]
impl Transport for LocalTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.handle.submit(self.player, msg)
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Channel closed"))
    }
}

impl Drop for LocalTransport {
    fn drop(&mut self) {
        let _ = self.handle.disconnect(self.player);
    }
}
