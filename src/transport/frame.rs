#![cfg(feature = "std")]

//! Length-prefixed bincode frames: a 4-byte big-endian length followed by
//! the serialized [`Message`].

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::Message;

/// Maximum frame size (1 MB). A full grid snapshot is a few kilobytes.
pub const MAX_FRAME_SIZE: u32 = 1_000_000;

fn io_error(e: std::io::Error) -> anyhow::Error {
    let context = match e.kind() {
        std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::BrokenPipe => {
            "Connection closed by peer".to_string()
        }
        std::io::ErrorKind::ConnectionReset => "Connection reset by peer".to_string(),
        _ => format!("I/O error: {}", e),
    };
    anyhow::Error::new(e).context(context)
}

/// `true` for errors that only mean the peer went away.
pub fn is_disconnect(err: &anyhow::Error) -> bool {
    use std::io::ErrorKind;
    err.downcast_ref::<std::io::Error>().is_some_and(|e| {
        matches!(
            e.kind(),
            ErrorKind::UnexpectedEof | ErrorKind::ConnectionReset | ErrorKind::BrokenPipe
        )
    })
}

pub async fn write_frame<W>(writer: &mut W, msg: &Message, max_size: u32) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let data = bincode::serialize(msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
    if data.len() as u64 > max_size as u64 {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            data.len(),
            max_size
        ));
    }
    let len = (data.len() as u32).to_be_bytes();
    writer.write_all(&len).await.map_err(io_error)?;
    writer.write_all(&data).await.map_err(io_error)?;
    writer.flush().await.map_err(io_error)?;
    Ok(())
}

pub async fn read_frame<R>(reader: &mut R, max_size: u32) -> anyhow::Result<Message>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf).await.map_err(io_error)?;
    let len = u32::from_be_bytes(len_buf);

    if len > max_size {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            len,
            max_size
        ));
    }
    if len == 0 {
        return Err(anyhow::anyhow!("Invalid message length: 0"));
    }

    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf).await.map_err(io_error)?;
    bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
}
