use seabattle::{simulate, Client, Engine, Hub, Inbound, Message, PlayerId, Transport, PROTOCOL_VERSION};
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{timeout, Duration};

#[test]
fn test_apply_delivers_to_registered_channel() {
    let (mut engine, _handle) = Engine::new(Hub::with_seed(1));
    let (tx, mut rx) = unbounded_channel();
    let player = PlayerId(42);
    engine.apply(Inbound::Connected { player, outbound: tx });
    engine.apply(Inbound::Message {
        from: player,
        msg: Message::Hello { version: PROTOCOL_VERSION },
    });
    assert_eq!(
        rx.try_recv().unwrap(),
        Message::Welcome {
            version: PROTOCOL_VERSION,
            player
        }
    );

    engine.apply(Inbound::Message {
        from: player,
        msg: Message::CreateRoom,
    });
    assert!(matches!(rx.try_recv().unwrap(), Message::RoomCreated { .. }));
    assert_eq!(engine.hub().rooms().len(), 1);

    // once disconnected nothing more is delivered
    engine.apply(Inbound::Disconnected { player });
    engine.apply(Inbound::Message {
        from: player,
        msg: Message::CreateRoom,
    });
    assert!(rx.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_local_clients_share_a_room() -> anyhow::Result<()> {
    let (engine, handle) = Engine::new(Hub::with_seed(2));
    let engine_task = tokio::spawn(engine.run());

    let mut host = Client::connect(handle.connect_local()?).await?;
    let mut guest = Client::connect(handle.connect_local()?).await?;
    assert_ne!(host.player(), guest.player());

    let room = host.create_room().await?;
    let grid = host.join_room(&room).await?;
    assert_eq!(grid.occupied_count(), 0);
    guest.join_room(&room).await?;

    let mut third = Client::connect(handle.connect_local()?).await?;
    let err = third.join_room(&room).await.unwrap_err();
    assert!(err.to_string().contains("RoomFull"), "{}", err);

    host.place(0).await?;
    assert!(matches!(host.recv().await?, Message::FieldUpdated { ready: false, .. }));

    // losing the host resets the room for the guest
    drop(host);
    let msg = timeout(Duration::from_secs(5), guest.recv()).await??;
    match msg {
        Message::FieldsReset { grid } => assert_eq!(grid.occupied_count(), 0),
        other => panic!("unexpected {:?}", other),
    }

    // the freed seat can be taken
    third.join_room(&room).await?;

    drop(guest);
    drop(third);
    drop(handle);
    let hub = timeout(Duration::from_secs(5), engine_task).await??;
    assert!(hub.rooms().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_room_is_reported_over_local_transport() -> anyhow::Result<()> {
    let (engine, handle) = Engine::new(Hub::with_seed(3));
    tokio::spawn(engine.run());

    let mut transport = handle.connect_local()?;
    // nothing is answered before the handshake
    transport.send(Message::CreateRoom).await?;
    transport.send(Message::Hello { version: PROTOCOL_VERSION }).await?;
    assert!(matches!(transport.recv().await?, Message::Welcome { .. }));

    let mut client = Client::connect(handle.connect_local()?).await?;
    let err = client.join_room(&"missing".into()).await.unwrap_err();
    assert!(err.to_string().contains("RoomNotFound"), "{}", err);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_simulated_matches_have_one_winner() -> anyhow::Result<()> {
    for seed in 0..5 {
        let report = timeout(Duration::from_secs(30), simulate(seed)).await??;
        assert_eq!(report.seed, seed);
        assert_ne!(report.host.won, report.guest.won);
        let winner = if report.host.won { report.host } else { report.guest };
        assert_eq!(report.winner, if report.host.won { "host" } else { "guest" });
        // every one of the twenty decks must be struck
        assert!(winner.strikes >= 20, "seed {}: {:?}", seed, report);
        assert!(report.host.strikes + report.guest.strikes <= 200);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_simulation_is_reproducible() -> anyhow::Result<()> {
    let first = simulate(11).await?;
    let second = simulate(11).await?;
    assert_eq!(first, second);

    let json = serde_json::to_value(&first)?;
    assert!(json["winner"].is_string());
    assert!(json["room"].is_string());
    Ok(())
}
