use std::collections::HashSet;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::player::ai::plan_layout;
use seabattle::{Game, GameError, GameStatus, LeaveOutcome, PlayerId, RoomId, Rooms};

const A: PlayerId = PlayerId(1);
const B: PlayerId = PlayerId(2);

fn started_room(rooms: &mut Rooms, rng: &mut SmallRng) -> RoomId {
    let room = rooms.create(rng);
    rooms.join(&room, A).unwrap();
    rooms.join(&room, B).unwrap();
    for id in [A, B] {
        for cell in plan_layout(rng).into_iter().flatten() {
            rooms.get_mut(&room).unwrap().place(id, cell, rng).unwrap();
        }
    }
    room
}

#[test]
fn test_room_ids_look_like_uuid_v4() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut rooms = Rooms::new();
    let id = rooms.create(&mut rng);
    let s = id.as_str();
    assert_eq!(s.len(), 36);
    let dashes: Vec<usize> = s.match_indices('-').map(|(i, _)| i).collect();
    assert_eq!(dashes, vec![8, 13, 18, 23]);
    assert_eq!(&s[14..15], "4");
    assert!(matches!(&s[19..20], "8" | "9" | "a" | "b"));
    assert!(s.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
}

#[test]
fn test_create_gives_unique_empty_rooms() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut rooms = Rooms::new();
    let ids: HashSet<RoomId> = (0..100).map(|_| rooms.create(&mut rng)).collect();
    assert_eq!(ids.len(), 100);
    assert_eq!(rooms.len(), 100);
    for id in &ids {
        let game = rooms.get(id).unwrap();
        assert!(game.is_empty());
        assert_eq!(game.status(), GameStatus::Placing);
    }
}

#[test]
fn test_join_errors() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut rooms = Rooms::new();
    assert_eq!(
        rooms.join(&RoomId::from("nope"), A).unwrap_err(),
        GameError::RoomNotFound
    );

    let room = rooms.create(&mut rng);
    let joined = rooms.join(&room, A).unwrap();
    assert_eq!(joined.id(), A);
    assert_eq!(joined.own_grid().occupied_count(), 0);
    assert_eq!(rooms.join(&room, A).unwrap_err(), GameError::AlreadyJoined);
    rooms.join(&room, B).unwrap();

    let before = rooms.get(&room).unwrap().clone();
    assert_eq!(rooms.join(&room, PlayerId(3)).unwrap_err(), GameError::RoomFull);
    assert_eq!(rooms.get(&room).unwrap(), &before);
}

#[test]
fn test_leave_mid_match_resets_for_remaining_player() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut rooms = Rooms::new();
    let room = started_room(&mut rooms, &mut rng);
    assert!(matches!(rooms.get(&room).unwrap().status(), GameStatus::InProgress { .. }));

    assert_eq!(rooms.leave(&room, A), LeaveOutcome::Reset { remaining: B });
    let game = rooms.get(&room).unwrap();
    assert_eq!(game.status(), GameStatus::Placing);
    assert_eq!(game.player_ids(), vec![B]);
    let b = game.player(B).unwrap();
    assert_eq!(b.own_grid().occupied_count(), 0);
    assert!(!b.is_ready());

    // a newcomer can take the free seat
    rooms.join(&room, PlayerId(3)).unwrap();
    assert!(rooms.get(&room).unwrap().is_full());
}

#[test]
fn test_last_leave_closes_room() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut rooms = Rooms::new();
    let room = rooms.create(&mut rng);
    rooms.join(&room, A).unwrap();

    assert_eq!(rooms.leave(&room, B), LeaveOutcome::NotJoined);
    assert_eq!(rooms.leave(&room, A), LeaveOutcome::Closed);
    assert!(!rooms.contains(&room));
    assert!(rooms.is_empty());
    assert_eq!(rooms.leave(&room, A), LeaveOutcome::NotJoined);
}

#[test]
fn test_rematch_resets_everyone_seated() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut rooms = Rooms::new();
    let room = started_room(&mut rooms, &mut rng);

    let ids = rooms.rematch(&room).unwrap();
    assert_eq!(ids, vec![A, B]);
    let game = rooms.get(&room).unwrap();
    assert_eq!(game.status(), GameStatus::Placing);
    for p in game.players() {
        assert_eq!(p.own_grid().occupied_count(), 0);
        assert!(p.opponent_view().cells().iter().all(|c| !c.is_hit));
    }

    assert_eq!(
        rooms.rematch(&RoomId::from("nope")).unwrap_err(),
        GameError::RoomNotFound
    );
}

#[test]
fn test_replace_and_remove() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut rooms = Rooms::new();
    let room = rooms.create(&mut rng);

    let previous = rooms.replace(&room, Game::with_players(&[A, B])).unwrap();
    assert!(previous.is_empty());
    assert_eq!(rooms.get(&room).unwrap().player_ids(), vec![A, B]);

    let removed = rooms.remove(&room).unwrap();
    assert!(removed.is_full());
    assert!(!rooms.contains(&room));
    assert!(rooms.remove(&room).is_none());
}

#[test]
fn test_unjoined_lists_empty_rooms_only() {
    let mut rng = SmallRng::seed_from_u64(14);
    let mut rooms = Rooms::new();
    let seated = rooms.create(&mut rng);
    let idle = rooms.create(&mut rng);
    rooms.join(&seated, A).unwrap();

    assert_eq!(rooms.unjoined().collect::<Vec<_>>(), vec![&idle]);
    rooms.join(&idle, B).unwrap();
    assert_eq!(rooms.unjoined().count(), 0);
}
