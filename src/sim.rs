#![cfg(feature = "std")]

//! Bot-driven matches, in process or against a remote server.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::client::Client;
use crate::core::{Grid, RoomId};
use crate::engine::Engine;
use crate::hub::Hub;
use crate::player::Player;
use crate::protocol::Message;
use crate::transport::Transport;
use crate::AiPlayer;

/// How one side's match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub won: bool,
    pub strikes: usize,
}

/// Summary of a simulated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub room: RoomId,
    pub host: MatchResult,
    pub guest: MatchResult,
    pub winner: &'static str,
}

/// Place the planned fleet, then answer turns until the match is over.
pub async fn play<T, P>(client: &mut Client<T>, player: &mut P, rng: &mut SmallRng) -> anyhow::Result<MatchResult>
where
    T: Transport,
    P: Player + ?Sized,
{
    let me = client.player();
    let mut started = None;

    for cell in player.plan_fleet(rng) {
        client.place(cell).await?;
        loop {
            match client.recv().await? {
                Message::FieldUpdated { .. } => break,
                Message::PlacementComplete { first_turn } => started = Some(first_turn),
                other => debug!("{} ignoring {} while placing", me, other.kind()),
            }
        }
    }

    let mut view = Grid::new();
    let mut strikes = 0;
    loop {
        let msg = match started.take() {
            Some(first_turn) => Message::PlacementComplete { first_turn },
            None => client.recv().await?,
        };
        let my_turn = match msg {
            Message::PlacementComplete { first_turn } => first_turn == me,
            Message::TurnChanged { your_turn } => your_turn,
            Message::OpponentFieldUpdated { grid } => {
                view = grid;
                false
            }
            Message::MatchOver { you_won } => return Ok(MatchResult { won: you_won, strikes }),
            _ => false,
        };
        if my_turn {
            let cell = player
                .select_target(rng, &view)
                .ok_or_else(|| anyhow::anyhow!("No cell left to strike"))?;
            client.strike(cell).await?;
            strikes += 1;
        }
    }
}

/// Play two bots against each other through an in-process engine.
pub async fn simulate(seed: u64) -> anyhow::Result<SimReport> {
    let (engine, handle) = Engine::new(Hub::with_seed(seed));
    let engine_task = tokio::spawn(engine.run());

    let mut host = Client::connect(handle.connect_local()?).await?;
    let mut guest = Client::connect(handle.connect_local()?).await?;
    drop(handle);

    let room = host.create_room().await?;
    host.join_room(&room).await?;
    guest.join_room(&room).await?;
    info!("simulating room {} with seed {}", room, seed);

    let mut host_rng = SmallRng::seed_from_u64(seed);
    let mut guest_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut host_ai = AiPlayer::new();
    let mut guest_ai = AiPlayer::new();
    let (host_result, guest_result) = tokio::try_join!(
        play(&mut host, &mut host_ai, &mut host_rng),
        play(&mut guest, &mut guest_ai, &mut guest_rng),
    )?;

    drop(host);
    drop(guest);
    engine_task.await?;

    let winner = if host_result.won { "host" } else { "guest" };
    Ok(SimReport {
        seed,
        room,
        host: host_result,
        guest: guest_result,
        winner,
    })
}
