#![cfg(feature = "std")]

use std::net::SocketAddr;

use log::{debug, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

use crate::config::ServerConfig;
use crate::engine::{Engine, EngineHandle};
use crate::hub::Hub;
use crate::transport::frame::{is_disconnect, read_frame, write_frame};

/// Bind `config.bind`, start an engine and serve until the listener fails.
pub async fn run(config: ServerConfig, hub: Hub) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&config.bind).await?;
    info!("listening on {}", listener.local_addr()?);
    let (engine, handle) = Engine::new(hub);
    tokio::spawn(engine.run());
    serve(listener, config, handle).await
}

/// Accept connections forever, one reader and one writer task each.
pub async fn serve(listener: TcpListener, config: ServerConfig, handle: EngineHandle) -> anyhow::Result<()> {
    loop {
        let (stream, addr) = listener.accept().await?;
        let handle = handle.clone();
        let config = config.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, addr, handle, config).await {
                warn!("connection {} ended with an error: {}", addr, e);
            }
        });
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    handle: EngineHandle,
    config: ServerConfig,
) -> anyhow::Result<()> {
    stream.set_nodelay(true)?;
    let (player, mut outbound) = handle.register()?;
    info!("{} connected from {}", player, addr);
    let (mut reader, mut writer) = stream.into_split();

    let max_size = config.max_frame_size;
    let io_timeout = config.io_timeout;
    let writer_task = tokio::spawn(async move {
        // Ends once the engine drops the sender on disconnect.
        while let Some(msg) = outbound.recv().await {
            match timeout(io_timeout, write_frame(&mut writer, &msg, max_size)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    debug!("write to {} failed: {}", player, e);
                    break;
                }
                Err(_) => {
                    debug!("write to {} timed out after {:?}", player, io_timeout);
                    break;
                }
            }
        }
    });

    let result = loop {
        match read_frame(&mut reader, max_size).await {
            Ok(msg) => {
                if let Err(e) = handle.submit(player, msg) {
                    break Err(e);
                }
            }
            Err(e) if is_disconnect(&e) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    handle.disconnect(player)?;
    let _ = writer_task.await;
    result
}
