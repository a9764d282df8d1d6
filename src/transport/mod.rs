use crate::protocol::Message;

#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

#[cfg(feature = "std")]
pub mod frame;
#[cfg(feature = "std")]
pub mod local;
#[cfg(feature = "std")]
pub mod tcp;
