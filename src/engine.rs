#![cfg(feature = "std")]

//! Single-owner event loop around [`Hub`].
//!
//! Connections never touch game state directly: they push [`Inbound`] events
//! into one channel and the engine task applies them one at a time.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::core::PlayerId;
use crate::hub::Hub;
use crate::protocol::{Envelope, Message};
use crate::transport::local::LocalTransport;

/// Events fed to the engine by connection tasks.
#[derive(Debug)]
pub enum Inbound {
    Connected {
        player: PlayerId,
        outbound: UnboundedSender<Message>,
    },
    Message {
        from: PlayerId,
        msg: Message,
    },
    Disconnected {
        player: PlayerId,
    },
}

/// Cloneable entry point used by connection tasks.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: UnboundedSender<Inbound>,
    next_id: Arc<AtomicU64>,
}

impl EngineHandle {
    /// Allocate a player id for a new connection and return the receiver of
    /// its outbound messages.
    pub fn register(&self) -> anyhow::Result<(PlayerId, UnboundedReceiver<Message>)> {
        let player = PlayerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (outbound, rx) = unbounded_channel();
        self.tx
            .send(Inbound::Connected { player, outbound })
            .map_err(|_| anyhow::anyhow!("Engine stopped"))?;
        Ok((player, rx))
    }

    /// Forward a message received from `from`.
    pub fn submit(&self, from: PlayerId, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(Inbound::Message { from, msg })
            .map_err(|_| anyhow::anyhow!("Engine stopped"))
    }

    /// Report a lost connection.
    pub fn disconnect(&self, player: PlayerId) -> anyhow::Result<()> {
        self.tx
            .send(Inbound::Disconnected { player })
            .map_err(|_| anyhow::anyhow!("Engine stopped"))
    }

    /// Open an in-process connection.
    pub fn connect_local(&self) -> anyhow::Result<LocalTransport> {
        let (player, rx) = self.register()?;
        Ok(LocalTransport::new(player, self.clone(), rx))
    }
}

pub struct Engine {
    hub: Hub,
    rx: UnboundedReceiver<Inbound>,
    outbound: HashMap<PlayerId, UnboundedSender<Message>>,
}

impl Engine {
    pub fn new(hub: Hub) -> (Self, EngineHandle) {
        let (tx, rx) = unbounded_channel();
        let engine = Self {
            hub,
            rx,
            outbound: HashMap::new(),
        };
        let handle = EngineHandle {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (engine, handle)
    }

    /// Apply events until every handle is dropped, then hand the hub back.
    pub async fn run(mut self) -> Hub {
        while let Some(event) = self.rx.recv().await {
            self.apply(event);
        }
        self.hub
    }

    /// Apply a single event and deliver what it produced.
    pub fn apply(&mut self, event: Inbound) {
        let out = match event {
            Inbound::Connected { player, outbound } => {
                self.hub.connect(player);
                self.outbound.insert(player, outbound);
                Vec::new()
            }
            Inbound::Message { from, msg } => self.hub.handle(from, msg),
            Inbound::Disconnected { player } => {
                self.outbound.remove(&player);
                self.hub.disconnect(player)
            }
        };
        self.deliver(out);
    }

    fn deliver(&mut self, out: Vec<Envelope>) {
        for Envelope { to, msg } in out {
            let Some(tx) = self.outbound.get(&to) else {
                debug!("dropping {} for departed {}", msg.kind(), to);
                continue;
            };
            if tx.send(msg).is_err() {
                debug!("outbound channel of {} closed", to);
                self.outbound.remove(&to);
            }
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }
}
