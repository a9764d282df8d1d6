use seabattle::transport::frame::{is_disconnect, read_frame, write_frame, MAX_FRAME_SIZE};
use seabattle::{Grid, Message, PlayerId};
use tokio::io::{duplex, AsyncWriteExt};

#[tokio::test(flavor = "multi_thread")]
async fn test_frames_carry_grids() -> anyhow::Result<()> {
    let (mut a, mut b) = duplex(64 * 1024);
    let mut grid = Grid::new();
    grid.cell_mut(5).unwrap().is_hit = true;
    let msg = Message::FieldUpdated { grid, ready: true };

    write_frame(&mut a, &msg, MAX_FRAME_SIZE).await?;
    write_frame(&mut a, &Message::Welcome { version: 1, player: PlayerId(9) }, MAX_FRAME_SIZE).await?;
    assert_eq!(read_frame(&mut b, MAX_FRAME_SIZE).await?, msg);
    assert!(matches!(
        read_frame(&mut b, MAX_FRAME_SIZE).await?,
        Message::Welcome { player: PlayerId(9), .. }
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame() -> anyhow::Result<()> {
    let (mut a, mut b) = duplex(64);
    a.write_all(&[0, 0, 0, 0]).await?;
    let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
    assert!(err.to_string().contains("Invalid message length"));
    assert!(!is_disconnect(&err));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_frames() -> anyhow::Result<()> {
    let (mut a, mut b) = duplex(64 * 1024);
    a.write_all(&[0xFF, 0xFF, 0xFF, 0xFF]).await?;
    let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
    assert!(err.to_string().contains("too large"));

    let msg = Message::FieldsReset { grid: Grid::new() };
    let err = write_frame(&mut a, &msg, 16).await.unwrap_err();
    assert!(err.to_string().contains("too large"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truncated_and_garbage_frames() -> anyhow::Result<()> {
    let (mut a, mut b) = duplex(64);
    a.write_all(&[0, 0, 0, 3, 0xFF, 0xFF, 0xFF]).await?;
    let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
    assert!(err.to_string().contains("Deserialization error"));

    a.write_all(&[0, 0, 0, 10, 1]).await?;
    drop(a);
    let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
    assert!(is_disconnect(&err), "{}", err);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disconnect_detection_uses_io_error_kind() -> anyhow::Result<()> {
    let (a, mut b) = duplex(64);
    drop(a);
    let err = read_frame(&mut b, MAX_FRAME_SIZE).await.unwrap_err();
    assert!(is_disconnect(&err));
    let io = err.downcast_ref::<std::io::Error>().expect("io error kept as source");
    assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);

    // wording alone does not make a disconnect
    assert!(!is_disconnect(&anyhow::anyhow!("Connection closed by peer")));
    Ok(())
}
